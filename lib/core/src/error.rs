//! Error handling foundation for the RukunOS client.
//!
//! Only the shared `Result` alias lives here. Domain error enums are
//! defined next to the code that raises them, and callers layer context
//! onto a propagating `Report` with rootcause's `.context()` where the
//! extra detail helps.

use rootcause::Report;

/// Result alias carrying a rootcause `Report` on the error path.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_defaults_to_untyped_context() {
        let ok: Result<&str> = Ok("session");
        assert_eq!(ok.expect("should be ok"), "session");
    }
}
