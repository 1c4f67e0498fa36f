//! Stage timing and structured diagnostic output.
//!
//! `measure` times a closure; `report!` emits a JSON line tagged with a
//! category, gated behind the `report-to-stderr` feature exactly like the
//! teacher's own report output — disabled by default so library consumers
//! never see console noise from a dependency.

use chrono::Utc;
use std::time::{Duration, Instant};

/// Runs `f`, returning its result alongside how long it took.
pub fn measure<Out, F: FnOnce() -> Out>(f: F) -> (Out, Duration) {
    let start = Instant::now();
    let res = f();
    (res, start.elapsed())
}

#[cfg(feature = "report-to-stderr")]
pub fn emit(category: &str, message: &str) {
    let line = serde_json::json!({
        "timestamp": Utc::now().to_rfc3339(),
        "category": category,
        "message": message,
    });
    eprintln!("{}", line);
}

#[cfg(not(feature = "report-to-stderr"))]
pub fn emit(_category: &str, _message: &str) {}

#[macro_export]
macro_rules! report {
    ($category:expr, $($arg:tt)*) => {
        $crate::report::emit($category, &format!($($arg)*))
    };
}
