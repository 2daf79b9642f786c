//! Terminal front end
//!
//! Drives the wizard from line-based input and renders the dashboard as
//! plain text. Input and output are generic so the same code serves stdin and
//! stdout in the binary and in-memory buffers in tests.
//!
//! At any prompt, `back` returns to the previous step and `quit` stops
//! without saving. An empty answer keeps the value shown in brackets.

use std::io::{self, BufRead, Write};

use crate::dashboard::DashboardModel;
use crate::profile::{Field, WizardStep, COMPANY_SIZES, INDUSTRIES, LAYOUT_CHOICES, THEME_CHOICES};
use crate::store::KeyValueStore;
use crate::theme::ThemePreference;
use crate::wizard::{OnboardingWizard, Stage};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Completed,
    /// Input ended or the user quit before submitting
    Aborted,
}

enum Answer {
    Value(String),
    Back,
    Quit,
}

/// Fields asked for on each step, in order
fn step_fields(step: WizardStep) -> &'static [Field] {
    match step {
        WizardStep::Personal => &[Field::Name, Field::Email],
        WizardStep::Business => &[Field::Company, Field::Industry, Field::Size],
        WizardStep::Preferences => &[Field::Theme, Field::Layout],
    }
}

/// Allowed values and their display text; empty for free-text fields
fn field_choices(field: Field) -> Vec<(&'static str, String)> {
    match field {
        Field::Industry => INDUSTRIES.iter().map(|&v| (v, v.to_string())).collect(),
        Field::Size => COMPANY_SIZES.iter().map(|&v| (v, format!("{v} employees"))).collect(),
        Field::Theme => THEME_CHOICES
            .iter()
            .map(|c| (c.value, format!("{} {} - {}", c.emoji, c.label, c.description)))
            .collect(),
        Field::Layout => LAYOUT_CHOICES
            .iter()
            .map(|c| (c.value, format!("{} {} - {}", c.emoji, c.label, c.description)))
            .collect(),
        Field::Name | Field::Email | Field::Company => Vec::new(),
    }
}

/// Accept a 1-based index or the value itself (case-insensitive)
fn match_choice(choices: &[(&'static str, String)], answer: &str) -> Option<&'static str> {
    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| choices.get(i)).map(|(v, _)| *v);
    }
    choices
        .iter()
        .find(|(v, _)| v.eq_ignore_ascii_case(answer))
        .map(|(v, _)| *v)
}

/// Interactive wizard session over a line reader and a writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the wizard completes or input ends
    pub fn run<S: KeyValueStore>(
        &mut self,
        wizard: &mut OnboardingWizard<S>,
    ) -> io::Result<PromptOutcome> {
        'steps: loop {
            let step = match wizard.stage() {
                Stage::Completed => return Ok(PromptOutcome::Completed),
                Stage::Step(step) => step,
            };

            self.write_step_header(step)?;

            for &field in step_fields(step) {
                match self.ask_field(wizard, field)? {
                    Answer::Value(value) => wizard.set_field(field, value),
                    Answer::Back => {
                        if !wizard.retreat() {
                            writeln!(self.output, "Already at the first step.")?;
                        }
                        continue 'steps;
                    }
                    Answer::Quit => return Ok(PromptOutcome::Aborted),
                }

                if let Some(message) = wizard.error(field) {
                    writeln!(self.output, "  ! {message}")?;
                }
            }

            let moved = if wizard.is_final_step() {
                match self.confirm_submit()? {
                    Answer::Value(_) => wizard.submit(),
                    Answer::Back => {
                        wizard.retreat();
                        continue 'steps;
                    }
                    Answer::Quit => return Ok(PromptOutcome::Aborted),
                }
            } else {
                wizard.advance()
            };

            if !moved {
                writeln!(self.output, "Please fix the following before continuing:")?;
                for (field, message) in wizard.errors().iter() {
                    writeln!(self.output, "  - {}: {}", field.label(), message)?;
                }
            }
        }
    }

    fn write_step_header(&mut self, step: WizardStep) -> io::Result<()> {
        let bar: String = WizardStep::all()
            .iter()
            .map(|s| if s.number() <= step.number() { '■' } else { '□' })
            .collect();

        writeln!(self.output)?;
        writeln!(self.output, "{}  {}  {}% Complete", step, bar, step.percent_complete())?;
        writeln!(self.output, "{}", step.title())?;
        writeln!(self.output, "{}", step.description())?;
        Ok(())
    }

    fn ask_field<S: KeyValueStore>(
        &mut self,
        wizard: &OnboardingWizard<S>,
        field: Field,
    ) -> io::Result<Answer> {
        let choices = field_choices(field);

        loop {
            for (i, (_, display)) in choices.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, display)?;
            }

            let current = wizard.profile().get(field);
            write!(self.output, "{} [{}]: ", field.label(), current)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Answer::Quit);
            };
            let answer = line.trim();

            match answer.to_ascii_lowercase().as_str() {
                "back" => return Ok(Answer::Back),
                "quit" | "exit" => return Ok(Answer::Quit),
                _ => {}
            }

            if answer.is_empty() {
                return Ok(Answer::Value(current.to_string()));
            }
            if choices.is_empty() {
                return Ok(Answer::Value(line));
            }
            match match_choice(&choices, answer) {
                Some(value) => return Ok(Answer::Value(value.to_string())),
                None => writeln!(self.output, "  Please choose one of the listed options.")?,
            }
        }
    }

    fn confirm_submit(&mut self) -> io::Result<Answer> {
        loop {
            write!(self.output, "Complete setup? [Y/back/quit]: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Answer::Quit);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(Answer::Value(String::new())),
                "back" | "b" => return Ok(Answer::Back),
                "quit" | "exit" | "n" | "no" => return Ok(Answer::Quit),
                _ => {}
            }
        }
    }

    /// Next line without its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}

/// Render the dashboard as text
pub fn write_dashboard<W: Write>(out: &mut W, model: &DashboardModel) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", model.greeting)?;
    writeln!(out, "{}", model.subtitle)?;
    writeln!(out)?;

    for stat in &model.stats {
        writeln!(out, "  {} {:<16} {:>4}   {}", stat.emoji, stat.title, stat.value, stat.subtitle)?;
    }

    writeln!(out)?;
    writeln!(out, "Weekly Progress (avg {:.1}%)", model.average_progress())?;
    for point in &model.weekly_progress {
        let filled = (point.progress / 5) as usize;
        writeln!(
            out,
            "  {} {}{} {:>3}%",
            point.day,
            "█".repeat(filled),
            "░".repeat(20 - filled.min(20)),
            point.progress
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Your Profile ({})", model.avatar_initial)?;
    for row in &model.profile_rows {
        writeln!(out, "  {:<17} {}", row.label, row.value)?;
    }
    Ok(())
}

/// Render the theme preference and its resolved tokens
pub fn write_theme<W: Write>(out: &mut W, preference: &ThemePreference) -> io::Result<()> {
    let mode = if preference.dark_mode { "dark" } else { "light" };
    writeln!(out, "Mode:  {mode}")?;
    writeln!(out, "Style: {}", preference.style)?;
    writeln!(out)?;
    for (name, value) in preference.tokens().entries() {
        writeln!(out, "  {name:<16} {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{keys, MemoryStore};

    fn run_script(script: &str) -> (OnboardingWizard<MemoryStore>, PromptOutcome, String) {
        let mut wizard = OnboardingWizard::new(MemoryStore::new());
        let mut prompter = Prompter::new(script.as_bytes(), Vec::new());
        let outcome = prompter.run(&mut wizard).unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (wizard, outcome, output)
    }

    #[test]
    fn test_complete_session() {
        let script = "Ada Lovelace\nada@example.com\nAnalytical\n1\n1-10\n\n2\n\n";
        let (wizard, outcome, output) = run_script(script);

        assert_eq!(outcome, PromptOutcome::Completed);
        assert!(wizard.is_completed());
        let profile = wizard.profile();
        assert_eq!(profile.industry, "Technology");
        assert_eq!(profile.size, "1-10");
        assert_eq!(profile.theme, "modern");
        assert_eq!(profile.layout, "list");
        assert!(wizard.store().contains_key(keys::USER_DATA));
        assert!(output.contains("Step 3 of 3"));
    }

    #[test]
    fn test_invalid_input_repeats_step() {
        let script = "a\nada@example.com\nAda\n\n";
        let (wizard, outcome, output) = run_script(script);

        assert_eq!(outcome, PromptOutcome::Aborted);
        assert_eq!(wizard.stage(), Stage::Step(WizardStep::Business));
        assert!(output.contains("  ! Name must be at least 2 characters"));
        assert!(output.contains("Please fix the following before continuing:"));
    }

    #[test]
    fn test_back_returns_to_previous_step() {
        let script = "Ada\nada@example.com\nback\n";
        let (wizard, outcome, _) = run_script(script);

        assert_eq!(outcome, PromptOutcome::Aborted);
        assert_eq!(wizard.stage(), Stage::Step(WizardStep::Personal));
        assert_eq!(wizard.profile().name, "Ada");
    }

    #[test]
    fn test_unknown_choice_is_asked_again() {
        let script = "Ada\nada@example.com\nAcme\nAstrology\n9\nfinance\n";
        let (wizard, _, output) = run_script(script);

        assert_eq!(wizard.profile().industry, "Finance");
        assert_eq!(output.matches("Please choose one of the listed options.").count(), 2);
    }

    #[test]
    fn test_quit_and_eof_abort() {
        let (wizard, outcome, _) = run_script("quit\n");
        assert_eq!(outcome, PromptOutcome::Aborted);
        assert!(!wizard.is_completed());

        let (_, outcome, _) = run_script("");
        assert_eq!(outcome, PromptOutcome::Aborted);
    }

    #[test]
    fn test_write_dashboard() {
        let (wizard, _, _) = run_script("Ada Lovelace\nada@example.com\nAnalytical\n1\n4\n\n\ny\n");
        let model = DashboardModel::new(wizard.profile(), false);

        let mut out = Vec::new();
        write_dashboard(&mut out, &model).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Welcome back, Ada Lovelace!"));
        assert!(text.contains("Analytical Dashboard"));
        assert!(text.contains("200+ employees"));
        assert!(text.contains("Sun ██████████████████░░  90%"));
    }

    #[test]
    fn test_write_theme() {
        let mut out = Vec::new();
        write_theme(&mut out, &ThemePreference::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Mode:  light\nStyle: modern\n"));
        assert!(text.contains("buttonStyle"));
    }
}
