pub use chrono;
pub use comrak;
pub use futures;
pub use glob;
pub use lazy_static;
pub use log;
pub use regex;
pub use serde_json;
pub use serde_yaml;
pub use tokio;
