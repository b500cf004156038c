//! Route constants shared by the service router, the service client and the
//! integration tests.

pub const HEALTH: &str = "/health";

pub const REGISTER: &str = "/api/register";
pub const LOGIN: &str = "/api/login";
pub const PROFILE: &str = "/api/profile";

pub const RESOURCES: &str = "/api/resources";
pub const RESOURCES_FILL: &str = "/api/resources/fill";

pub const LOANS: &str = "/api/loans";
