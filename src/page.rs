//! Terminal rendering of the sign-up page.
//!
//! The page is a header, the form title, one prompt per field and a final
//! action prompt. Errors are printed under the field they belong to and
//! notifications are printed as a banner.

use crate::{
    form::{FormState, Notification, NotificationKind},
    models::Field,
};
use std::io::{self, BufRead, Write};

pub const TITLE: &str = "Create User Account";

const LOGO: &str = r"
  ____  _               _   _
 / ___|(_) __ _ _ __   | | | |_ __
 \___ \| |/ _` | '_ \  | | | | '_ \
  ___) | | (_| | | | | | |_| | |_) |
 |____/|_|\__, |_| |_|  \___/| .__/
          |___/              |_|
";

pub const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// Number of years offered by the year selector, starting at the current one.
pub const YEAR_CHOICES: i32 = 10;

pub fn year_choices(current_year: i32) -> Vec<i32> {
    (current_year..current_year + YEAR_CHOICES).collect()
}

/// Accept a month as `2`, `02`, `feb` or `February`; anything else is kept
/// as typed and left for validation to reject.
pub fn normalize_month(input: &str) -> String {
    let input = input.trim();
    if let Ok(number) = input.parse::<u32>() {
        if (1..=12).contains(&number) {
            return format!("{number:02}");
        }
    }
    let lower = input.to_lowercase();
    MONTHS
        .iter()
        .find(|(_, name)| {
            let name = name.to_lowercase();
            lower.len() >= 3 && name.starts_with(&lower)
        })
        .map_or_else(|| input.to_string(), |(value, _)| (*value).to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Cancel,
    Quit,
}

pub struct Page<R, W> {
    input: R,
    output: W,
    current_year: i32,
}

impl<R: BufRead, W: Write> Page<R, W> {
    pub fn new(input: R, output: W, current_year: i32) -> Self {
        Self {
            input,
            output,
            current_year,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn show_header(&mut self) -> io::Result<()> {
        writeln!(self.output, "{LOGO}")?;
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output, "{}", "=".repeat(TITLE.len()))?;
        writeln!(self.output, "Fields marked * are required. Press Enter to keep the current value.")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn hint(&self, field: Field) -> Option<String> {
        match field {
            Field::Day => Some("1-31".to_string()),
            Field::Month => Some("01-12 or name".to_string()),
            Field::Year => {
                let years = year_choices(self.current_year);
                let first = years.first().copied().unwrap_or(self.current_year);
                let last = years.last().copied().unwrap_or(self.current_year);
                Some(format!("{first}-{last}"))
            }
            Field::ContactNumber => Some("+1 (555) 123-4567".to_string()),
            _ => None,
        }
    }

    /// Ask for every field, then for the action to take.
    ///
    /// End of input counts as [`Action::Quit`].
    pub fn fill(&mut self, form: &mut FormState) -> io::Result<Action> {
        for field in Field::ALL {
            let current = form.values().get(field).to_string();
            let shown = if field.is_secret() && !current.is_empty() {
                "********".to_string()
            } else {
                current
            };
            match (self.hint(field), shown.is_empty()) {
                (Some(hint), true) => write!(self.output, "{}* ({hint}): ", field.label())?,
                (Some(hint), false) => write!(self.output, "{}* ({hint}) [{shown}]: ", field.label())?,
                (None, true) => write!(self.output, "{}*: ", field.label())?,
                (None, false) => write!(self.output, "{}* [{shown}]: ", field.label())?,
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Action::Quit);
            };
            if !line.is_empty() {
                let value = if field == Field::Month {
                    normalize_month(&line)
                } else {
                    line
                };
                form.set_field(field, value);
            }
            form.touch(field);
        }

        loop {
            write!(self.output, "[s]ubmit, [c]ancel or [q]uit: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Action::Quit);
            };
            match line.trim().to_lowercase().as_str() {
                "" | "s" | "submit" => return Ok(Action::Submit),
                "c" | "cancel" => return Ok(Action::Cancel),
                "q" | "quit" => return Ok(Action::Quit),
                _ => writeln!(self.output, "Unknown action `{line}`")?,
            }
        }
    }

    /// Print the errors the form wants shown, one per field.
    pub fn show_errors(&mut self, form: &FormState) -> io::Result<()> {
        for field in Field::ALL {
            if let Some(message) = form.visible_error(field) {
                writeln!(self.output, "  {}: {message}", field.label())?;
            }
        }
        Ok(())
    }

    pub fn show_notification(&mut self, notification: &Notification) -> io::Result<()> {
        let marker = match notification.kind {
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Error => "ERROR",
        };
        writeln!(self.output, "[{marker}] {}", notification.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::SignupApi,
        dto::{SignupRequest, SignupResponse},
        errors::SubmitError,
        form::SubmitOutcome,
        validation::current_year,
    };
    use std::{io::Cursor, time::Duration};

    fn page(input: &str) -> Page<Cursor<Vec<u8>>, Vec<u8>> {
        Page::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 2026)
    }

    #[test]
    fn months_accept_numbers_and_names() {
        assert_eq!(normalize_month("2"), "02");
        assert_eq!(normalize_month("11"), "11");
        assert_eq!(normalize_month("feb"), "02");
        assert_eq!(normalize_month("September"), "09");
        assert_eq!(normalize_month("13"), "13");
        assert_eq!(normalize_month("ju"), "ju");
    }

    #[test]
    fn year_selector_offers_ten_years() {
        let years = year_choices(2026);
        assert_eq!(years.len(), 10);
        assert_eq!(years.first(), Some(&2026));
        assert_eq!(years.last(), Some(&2035));
    }

    #[test]
    fn fill_reads_every_field_then_the_action() {
        let mut form = FormState::new(Duration::from_secs(3));
        let mut page = page(
            "Jane\n+1 (555) 123-4567\n7\nfeb\n2026\njane@example.com\nAbcd1234\nAbcd1234\ns\n",
        );

        assert_eq!(page.fill(&mut form).unwrap(), Action::Submit);
        let values = form.values();
        assert_eq!(values.full_name, "Jane");
        assert_eq!(values.month, "02");
        assert_eq!(values.year, "2026");
        assert_eq!(values.confirm_password, "Abcd1234");

        let output = String::from_utf8(page.into_output()).unwrap();
        assert!(output.contains("Full Name*: "));
        assert!(output.contains("Year* (2026-2035): "));
    }

    #[test]
    fn empty_lines_keep_values_and_secrets_are_masked() {
        let mut form = FormState::new(Duration::from_secs(3));
        form.set_field(Field::FullName, "Jane");
        form.set_field(Field::Password, "Abcd1234");
        let mut page = page("\n\n\n\n\n\n\n\nc\n");

        assert_eq!(page.fill(&mut form).unwrap(), Action::Cancel);
        assert_eq!(form.values().full_name, "Jane");

        let output = String::from_utf8(page.into_output()).unwrap();
        assert!(output.contains("Full Name* [Jane]: "));
        assert!(output.contains("Password* [********]: "));
        assert!(!output.contains("Abcd1234"));
    }

    #[test]
    fn end_of_input_quits() {
        let mut form = FormState::new(Duration::from_secs(3));
        assert_eq!(page("Jane\n").fill(&mut form).unwrap(), Action::Quit);
    }

    #[test]
    fn unknown_action_is_asked_again() {
        let mut form = FormState::new(Duration::from_secs(3));
        let mut page = page("\n\n\n\n\n\n\n\nmaybe\nq\n");
        assert_eq!(page.fill(&mut form).unwrap(), Action::Quit);
        let output = String::from_utf8(page.into_output()).unwrap();
        assert!(output.contains("Unknown action `maybe`"));
    }

    #[test]
    fn notification_banner() {
        let mut page = page("");
        page.show_notification(&Notification {
            kind: NotificationKind::Error,
            message: "There was an error creating the account.",
            duration: Duration::from_secs(3),
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(page.into_output()).unwrap(),
            "[ERROR] There was an error creating the account.\n"
        );
    }

    struct NeverCalled;

    impl SignupApi for NeverCalled {
        async fn create_user(&self, _: &SignupRequest) -> Result<SignupResponse, SubmitError> {
            panic!("an invalid form must not be sent");
        }
    }

    fn rendered_errors(page: Page<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(page.into_output()).unwrap()
    }

    #[tokio::test]
    async fn inline_errors_show_the_date_error_under_day() {
        let mut form = FormState::new(Duration::from_secs(3));
        form.set_field(Field::FullName, "Jane");
        form.set_field(Field::ContactNumber, "+1 (555) 123-4567");
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::Day, "31");
        form.set_field(Field::Month, "02");
        form.set_field(Field::Year, current_year().to_string());
        form.set_field(Field::Password, "Abcd1234");

        let mut before = page("");
        before.show_errors(&form).unwrap();
        assert_eq!(rendered_errors(before), "", "nothing is shown before submit");

        assert_eq!(form.submit(&NeverCalled).await, SubmitOutcome::Invalid);
        let mut after = page("");
        after.show_errors(&form).unwrap();
        assert_eq!(
            rendered_errors(after),
            "  Day: Invalid date\n  Confirm Password: Confirm Password is required\n"
        );

        form.set_field(Field::Day, "28");
        let mut edited = page("");
        edited.show_errors(&form).unwrap();
        let output = rendered_errors(edited);
        assert!(!output.contains("Day:"));
        assert!(!output.contains("Email"));
        assert!(output.contains("Confirm Password:"));
    }
}
