use realty_auth::{Notification, Notifier, Variant};

/// Prints session notifications to stderr so stdout stays machine-readable.
/// Quiet mode keeps only the destructive ones.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        if let Some(line) = render(&notification, self.quiet) {
            eprintln!("{line}");
        }
    }
}

fn render(notification: &Notification, quiet: bool) -> Option<String> {
    match notification.variant {
        Variant::Default if quiet => None,
        Variant::Default => Some(format!(
            "{}: {}",
            notification.title, notification.description
        )),
        Variant::Destructive => Some(format!(
            "{} (error): {}",
            notification.title, notification.description
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use realty_auth::Notification;

    use super::render;

    #[test]
    fn quiet_mode_drops_informational_notifications() {
        let welcome = Notification::info("Login Successful", "Welcome back, Jane!");
        assert_eq!(render(&welcome, true), None);
        assert_eq!(
            render(&welcome, false).as_deref(),
            Some("Login Successful: Welcome back, Jane!")
        );
    }

    #[test]
    fn errors_are_always_shown() {
        let failure = Notification::error("Login Failed", "Invalid username or password");
        assert_eq!(
            render(&failure, true).as_deref(),
            Some("Login Failed (error): Invalid username or password")
        );
    }
}
