//! Loading and error blocks shared by every section

use crate::resource::ResourceState;

/// Shown while a resource is loading
pub const LOADING_TEXT: &str = "Loading...";

/// Heading of the error block
pub const ERROR_HEADING: &str = "Error loading data";

/// Manual retry hint under the error message
pub const RETRY_HINT: &str = "Try Again";

/// Error block for a failed resource
pub fn error_block(message: &str) -> String {
    format!("{}\n  {}\n  [{}]", ERROR_HEADING, message, RETRY_HINT)
}

/// Render a resource state, delegating `Success` to `render`
pub fn render_state<T>(state: &ResourceState<T>, render: impl FnOnce(&T) -> String) -> String {
    match state {
        ResourceState::Loading => LOADING_TEXT.to_string(),
        ResourceState::Success(data) => render(data),
        ResourceState::Failure(message) => error_block(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state() {
        let render = |n: &u32| format!("{} items", n);
        assert_eq!(render_state(&ResourceState::Loading, render), LOADING_TEXT);
        assert_eq!(render_state(&ResourceState::Success(3), render), "3 items");

        let failed = render_state(&ResourceState::Failure("boom".to_string()), render);
        assert!(failed.starts_with(ERROR_HEADING));
        assert!(failed.contains("boom"));
        assert!(failed.ends_with("[Try Again]"));
    }
}
