/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// A limit as a `take`/`truncate` length.
#[must_use]
pub fn as_len(limit: u32) -> usize {
    usize::try_from(limit).unwrap_or(usize::MAX)
}
