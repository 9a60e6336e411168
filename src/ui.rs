use crate::models::{FactorQuestion, RiskAssessment, VulnerabilitySource};
use crate::simulation::SimulationOutcome;
use console::{style, Color, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const DEFAULT_WIDTH: usize = 80;

/// Option colors cycle green, yellow, orange, red.
const OPTION_COLORS: [Color; 4] = [Color::Green, Color::Yellow, Color::Color256(208), Color::Red];

/// Number of rows in the simulation summary table
const SUMMARY_ROWS: usize = 6;

/// Process-wide output context. Constructed once in `main` and handed to
/// every component that renders; prompts and decoration go through
/// [`Console::say`], results through [`Console::report`].
pub struct Console {
    term: Term,
    width: usize,
    muted: bool,
}

impl Console {
    pub fn stdout() -> Self {
        let term = Term::stdout();
        let width = match term.size_checked() {
            Some((_, cols)) if cols > 0 => cols as usize,
            _ => DEFAULT_WIDTH,
        };
        Self {
            term,
            width,
            muted: false,
        }
    }

    /// Console that only prints results; used with `--quiet` and in tests.
    pub fn muted() -> Self {
        Self {
            term: Term::stdout(),
            width: DEFAULT_WIDTH,
            muted: true,
        }
    }

    /// Decoration and prompts, suppressed when muted.
    pub fn say(&self, line: impl AsRef<str>) {
        if !self.muted {
            let _ = self.term.write_line(line.as_ref());
        }
    }

    /// Results, always printed.
    pub fn report(&self, line: impl AsRef<str>) {
        let _ = self.term.write_line(line.as_ref());
    }

    pub fn clear_screen(&self) {
        if !self.muted && self.term.is_term() {
            let _ = self.term.clear_screen();
        }
    }

    fn centered(&self, text: &str) -> String {
        console::pad_str(text, self.width, console::Alignment::Center, None).into_owned()
    }

    pub fn banner(&self) {
        let rule = "=".repeat(self.width);
        self.say(&rule);
        let title = self.centered("Risk Assessment Tool");
        self.say(style(title).magenta().bold().to_string());
        let subtitle = self.centered("Comprehensive Security and Risk Evaluation");
        self.say(style(subtitle).bold().to_string());
        self.say(self.centered(
            "Systematically evaluate risk across vulnerability, technical impact, \
             business impact, and threat agent factors.",
        ));
        let system_info = format!(
            "assessor {} · {}/{} · v{}",
            whoami::username(),
            std::env::consts::OS,
            std::env::consts::ARCH,
            env!("CARGO_PKG_VERSION")
        );
        self.say(style(self.centered(&system_info)).color256(240).to_string());
        self.say(&rule);
        let closing =
            self.centered("Begin your assessment to identify and mitigate risks effectively.");
        self.say(style(closing).italic().to_string());
    }

    pub fn section(&self, header: &str) {
        let line = "------------------------------------";
        self.say(style(self.centered(line)).cyan().bold().to_string());
        self.say(style(self.centered(header)).cyan().bold().to_string());
        self.say(style(self.centered(line)).cyan().bold().to_string());
    }

    pub fn question(&self, question: &FactorQuestion) {
        self.say("");
        self.say(style(&question.prompt).cyan().bold().to_string());

        let options: Vec<String> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let color = OPTION_COLORS[i % OPTION_COLORS.len()];
                format!(
                    "\t{}. {}",
                    style(i + 1).fg(color).bold(),
                    style(option).fg(color)
                )
            })
            .collect();
        self.say(options.join(" "));
        self.say("");
    }

    pub fn prompt(&self, text: &str) {
        if !self.muted {
            let _ = self.term.write_str(&format!("{} ", style(text).bold()));
            let _ = self.term.flush();
        }
    }

    pub fn success(&self, message: &str) {
        self.say(style(message).green().bold().to_string());
    }

    pub fn warn(&self, message: &str) {
        self.say(style(message).yellow().bold().to_string());
    }

    pub fn error(&self, message: &str) {
        self.say(style(message).red().bold().to_string());
    }

    pub fn highlight(&self, message: &str) {
        self.say(style(message).magenta().bold().to_string());
    }

    /// Spinner shown while the simulation runs
    pub fn spinner(&self, message: impl Into<String>) -> ProgressBar {
        if self.muted || !self.term.is_term() {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(spinner_style.tick_strings(&["|", "/", "-", "\\", "✓"]));
        }
        spinner.set_message(message.into());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    pub fn print_assessment(&self, assessment: &RiskAssessment) {
        self.report("");
        if let VulnerabilitySource::Reports { burp, nessus } = &assessment.vulnerability_source {
            let resolved = burp.iter().chain(nessus.iter()).count();
            if resolved > 1 {
                self.report(
                    style(format!("Vulnerability score averaged over {} reports", resolved))
                        .dim()
                        .to_string(),
                );
            }
        }
        self.report(
            style(format!("Vulnerability Risk Score: {:.2}%", assessment.vulnerability_pct))
                .green()
                .bold()
                .to_string(),
        );
        self.report(format!(
            "   {} Technical Impact: {:.2}%",
            style("├─").color256(240),
            assessment.technical_pct
        ));
        self.report(format!(
            "   {} Business Impact: {:.2}%",
            style("├─").color256(240),
            assessment.business_pct
        ));
        self.report(format!(
            "   {} Threat Agent: {:.2}%",
            style("└─").color256(240),
            assessment.threat_pct
        ));
        self.report("");
        self.report(
            style(format!(
                "Total Risk Calculated (including Vulnerability Score): {:.2}%",
                assessment.total_pct
            ))
            .magenta()
            .bold()
            .to_string(),
        );
        let level = assessment.risk_level;
        self.report(format!(
            "{} Risk Level: {} ({})",
            level.emoji(),
            style(level.label()).bold(),
            level.range()
        ));
    }

    pub fn print_simulation(&self, outcome: &SimulationOutcome) {
        let curves = &outcome.curves;
        let points = curves.before.points.len();

        self.report("");
        self.report(style("Loss Probability Analysis").cyan().bold().to_string());
        self.report("═══════════════════════════════════════════════════════════");
        self.report(format!(
            "Log-normal parameters: mean {:.4}, std dev {:.4}",
            outcome.distribution.mean, outcome.distribution.std_dev
        ));
        self.report(format!(
            "Mean simulated loss before control: ${:.2}",
            outcome.mean_loss_before
        ));
        self.report(format!(
            "Mean simulated loss after control:  ${:.2}",
            outcome.mean_loss_after
        ));
        self.report("");
        self.report(format!(
            "{:>16} {:>10} {:>10} {:>10}",
            "Loss ≥ x ($)", "Before %", "After %", "Accept. %"
        ));

        if points == 0 {
            return;
        }
        let rows = SUMMARY_ROWS.min(points);
        let mut last = None;
        for row in 0..rows {
            let index = if rows == 1 {
                0
            } else {
                row * (points - 1) / (rows - 1)
            };
            if last == Some(index) {
                continue;
            }
            last = Some(index);
            self.report(format!(
                "{:>16.2} {:>10.2} {:>10.2} {:>10.2}",
                curves.before.points[index].loss,
                curves.before.points[index].probability_pct,
                curves.after.points[index].probability_pct,
                curves.threshold.points[index].probability_pct
            ));
        }
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        let _ = self.term.show_cursor();
    }
}
