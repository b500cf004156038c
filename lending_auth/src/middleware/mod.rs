pub mod decode_jwt;
