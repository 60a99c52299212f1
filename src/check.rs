//! Static checks over a built menu tree (`climenu --check`).

use crate::menu::{ColorSpec, MenuNode};
use crate::ui::banner::BannerFont;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::ColorName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One problem found in a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIssue {
    pub severity: Severity,
    /// Menu path, e.g. `Main > Tools`
    pub location: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub issues: Vec<CheckIssue>,
    pub menus: usize,
    pub actions: usize,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, location: &str, message: impl Into<String>) {
        self.push(Severity::Warning, location, message.into());
    }

    pub fn add_error(&mut self, location: &str, message: impl Into<String>) {
        self.push(Severity::Error, location, message.into());
    }

    fn push(&mut self, severity: Severity, location: &str, message: String) {
        self.issues.push(CheckIssue {
            severity,
            location: location.to_string(),
            message,
        });
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        for issue in &self.issues {
            let icon = match issue.severity {
                Severity::Warning => Icon::Warning,
                Severity::Error => Icon::Error,
            };
            out.push_str(&format!(
                "{} {}: {}\n",
                icon.colored(supports_color, supports_unicode),
                ColoredText::dim(issue.location.as_str()).render(supports_color),
                issue.message
            ));
        }

        if !self.issues.is_empty() {
            out.push('\n');
        }

        let counts = format!(
            "{} {}, {} {}, {} {}",
            self.menus,
            plural(self.menus, "menu", "menus"),
            self.actions,
            plural(self.actions, "action", "actions"),
            self.errors(),
            plural(self.errors(), "error", "errors"),
        );
        let summary = if !self.is_success() {
            format!(
                "{} {}",
                Icon::Error.colored(supports_color, supports_unicode),
                ColoredText::error(format!("Check failed ({counts})"))
                    .bold()
                    .render(supports_color)
            )
        } else if self.warnings() > 0 {
            format!(
                "{} {}",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!(
                    "Check passed with {} {} ({counts})",
                    self.warnings(),
                    plural(self.warnings(), "warning", "warnings")
                ))
                .render(supports_color)
            )
        } else {
            format!(
                "{} {}",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success(format!("Check passed ({counts})")).render(supports_color)
            )
        };
        out.push_str(&summary);
        out.push('\n');
        out
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Check every node of `root`:
/// - action entries must name a registered action (error)
/// - color names must be known (error)
/// - banner fonts should be known (warning)
/// - menus should have at least one entry (warning)
pub fn check_tree(root: &MenuNode) -> CheckReport {
    let mut report = CheckReport::new();

    root.walk(&mut |node, path| {
        report.menus += 1;

        let mut location = root.title().to_string();
        for title in path {
            location.push_str(" > ");
            location.push_str(title);
        }

        if let Some(spec) = node.style() {
            check_colors(&mut report, &location, "menu title", spec);
        }

        if let Some(banner) = node.banner() {
            if BannerFont::from_name(&banner.font).is_none() {
                report.add_warning(
                    &location,
                    format!(
                        "unknown banner font '{}' (known: {}); 'standard' will be used",
                        banner.font,
                        BannerFont::NAMES.join(", ")
                    ),
                );
            }
        }

        if node.entries().is_empty() {
            report.add_warning(&location, "menu has no entries");
        }

        for (i, entry) in node.entries().iter().enumerate() {
            if let Some(spec) = entry.style() {
                let what = format!("entry {} '{}'", i + 1, entry.title());
                check_colors(&mut report, &location, &what, spec);
            }

            let Some(action) = entry.action_name() else {
                continue;
            };
            report.actions += 1;
            match node.actions() {
                Some(registry) if registry.contains(action) => {}
                Some(_) => report.add_error(
                    &location,
                    format!(
                        "entry {} '{}' uses action '{action}', which is not defined",
                        i + 1,
                        entry.title()
                    ),
                ),
                None => report.add_error(
                    &location,
                    format!("entry {} uses action '{action}' but no actions are loaded", i + 1),
                ),
            }
        }
    });

    report
}

fn check_colors(report: &mut CheckReport, location: &str, what: &str, spec: &ColorSpec) {
    let names = [("text", &spec.text), ("background", &spec.background)];
    for (field, name) in names {
        let Some(name) = name else {
            continue;
        };
        if let Err(err) = name.parse::<ColorName>() {
            report.add_error(location, format!("{what} {field} color: {err}"));
        }
    }
}
