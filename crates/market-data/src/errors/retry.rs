/// Classification for retry policy.
///
/// | Class | Retried by the provider? |
/// |-------|--------------------------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, once after a short delay |
/// | `Fallback` | No, the error reaches the caller |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Bad coin id or undecodable payload. Retrying won't help.
    Never,

    /// Rate limiting (429) or timeout. Worth one more attempt after a pause.
    WithBackoff,

    /// Server or transport failure. Surfaced immediately.
    Fallback,
}
