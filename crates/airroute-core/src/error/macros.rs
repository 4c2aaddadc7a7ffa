//! Error macros for airroute

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RouteError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting airport codes missing from a graph
#[macro_export]
macro_rules! ensure_airport {
    ($graph:expr, $code:expr) => {
        if !$graph.contains($code) {
            return Err($crate::error::RouteError::unknown_airport($code));
        }
    };
}
