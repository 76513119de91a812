//! Captcha question entity.

pub mod model;

pub use model::CaptchaQuestion;
