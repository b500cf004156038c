mod renamed_middleware {
    pub use lending_auth::middleware::decode_jwt::handler as decode_jwt;
}
pub use renamed_middleware::*;
