//! ---
//! vl_section: "03-logging"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Structured logging adapters and sinks."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
/// Emit an informational log enriched with target context.
#[macro_export]
macro_rules! vl_info {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $crate::tracing::Level::INFO,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        $crate::tracing::event!(
            $crate::tracing::Level::INFO,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit a debug log enriched with target context.
#[macro_export]
macro_rules! vl_debug {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $crate::tracing::Level::DEBUG,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        $crate::tracing::event!(
            $crate::tracing::Level::DEBUG,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit a warning enriched with target context.
#[macro_export]
macro_rules! vl_warn {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $crate::tracing::Level::WARN,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        $crate::tracing::event!(
            $crate::tracing::Level::WARN,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an error log enriched with target context.
#[macro_export]
macro_rules! vl_error {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $crate::tracing::Level::ERROR,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        let ctx = &$crate::LogContext::default();
        $crate::tracing::event!(
            $crate::tracing::Level::ERROR,
            target_name = ctx.target.unwrap_or(""),
            file = ctx.file.unwrap_or(""),
            policy = ctx.policy.unwrap_or(""),
            message = %format_args!($($arg)+)
        );
    }};
}
