//! Measurement input form.
//!
//! Every field is optional: a blank field submits as an absent measurement,
//! which the engine reports as "not evaluated".

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{GlucoseContext, HealthInput, Sex};
use crate::tui::styles::VitalsTheme;

/// What a field accepts and how it parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    /// m/f
    Sex,
    /// f(asting) / r(andom) / p(ost-meal)
    GlucoseContext,
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str, hint: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            hint,
            kind,
            value: String::new(),
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Numeric => c.is_ascii_digit() || c == '.',
            FieldKind::Sex => matches!(c.to_ascii_lowercase(), 'm' | 'f') && self.value.is_empty(),
            FieldKind::GlucoseContext => {
                matches!(c.to_ascii_lowercase(), 'f' | 'r' | 'p') && self.value.is_empty()
            }
        }
    }
}

/// Input form state
pub struct FormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::new("Height", "cm, blank to skip", FieldKind::Numeric),
                FormField::new("Weight", "kg, blank to skip", FieldKind::Numeric),
                FormField::new("Age", "years", FieldKind::Numeric),
                FormField::new("Sex", "m/f, blank to skip", FieldKind::Sex),
                FormField::new("Systolic BP", "mmHg", FieldKind::Numeric),
                FormField::new("Diastolic BP", "mmHg", FieldKind::Numeric),
                FormField::new("Glucose", "mg/dL", FieldKind::Numeric),
                FormField::new(
                    "Glucose context",
                    "f=fasting r=random p=post-meal",
                    FieldKind::GlucoseContext,
                ),
                FormField::new("Hemoglobin", "g/dL", FieldKind::Numeric),
                FormField::new("WBC", "10^3/uL", FieldKind::Numeric),
                FormField::new("RBC", "10^6/uL", FieldKind::Numeric),
                FormField::new("Platelets", "10^3/uL", FieldKind::Numeric),
                FormField::new("MCV", "fL", FieldKind::Numeric),
                FormField::new("Total cholesterol", "mg/dL", FieldKind::Numeric),
                FormField::new("LDL", "mg/dL", FieldKind::Numeric),
                FormField::new("HDL", "mg/dL", FieldKind::Numeric),
                FormField::new("Triglycerides", "mg/dL", FieldKind::Numeric),
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl FormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Try to type a character into the current field. Returns false when
    /// the field rejects it, so the caller can treat it as a command key.
    pub fn input_char(&mut self, c: char) -> bool {
        let field = &mut self.fields[self.selected_field];
        if field.accepts(c) {
            field.value.push(c.to_ascii_lowercase());
            self.error_message = None;
            true
        } else {
            false
        }
    }

    /// Delete the last character of the current field
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.clear();
    }

    /// Fill the form with a plausible healthy adult.
    pub fn load_sample_data(&mut self) {
        let sample = [
            "175", "70", "30", "m", "120", "80", "90", "f", "14", "6", "4.8", "250", "90", "180",
            "100", "50", "120",
        ];
        for (field, value) in self.fields.iter_mut().zip(sample) {
            field.value = value.to_string();
        }
        self.error_message = None;
    }

    fn numeric(&self, label: &'static str) -> Result<Option<f64>, String> {
        let field = self
            .fields
            .iter()
            .find(|f| f.label == label)
            .ok_or_else(|| format!("{label}: unknown field"))?;
        if field.value.is_empty() {
            return Ok(None);
        }
        field
            .value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("{label}: invalid number"))
    }

    fn sex(&self) -> Option<Sex> {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::Sex)
            .and_then(|f| match f.value.as_str() {
                "m" => Some(Sex::Male),
                "f" => Some(Sex::Female),
                _ => None,
            })
    }

    fn glucose_context(&self) -> Option<GlucoseContext> {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::GlucoseContext)
            .and_then(|f| match f.value.as_str() {
                "f" => Some(GlucoseContext::Fasting),
                "r" => Some(GlucoseContext::Random),
                "p" => Some(GlucoseContext::PostMeal),
                _ => None,
            })
    }

    /// Convert the form into a [`HealthInput`] snapshot.
    ///
    /// Blank fields become absent measurements; unparsable text is an error
    /// shown in the footer rather than a submission.
    pub fn to_health_input(&self) -> Result<HealthInput, String> {
        Ok(HealthInput {
            height_cm: self.numeric("Height")?,
            weight_kg: self.numeric("Weight")?,
            age_years: self.numeric("Age")?,
            sex: self.sex(),
            systolic: self.numeric("Systolic BP")?,
            diastolic: self.numeric("Diastolic BP")?,
            glucose: self.numeric("Glucose")?,
            glucose_context: self.glucose_context(),
            hemoglobin: self.numeric("Hemoglobin")?,
            wbc: self.numeric("WBC")?,
            rbc: self.numeric("RBC")?,
            platelets: self.numeric("Platelets")?,
            mcv: self.numeric("MCV")?,
            total_cholesterol: self.numeric("Total cholesterol")?,
            ldl: self.numeric("LDL")?,
            hdl: self.numeric("HDL")?,
            triglycerides: self.numeric("Triglycerides")?,
        })
    }
}

/// Render the measurement input form
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_fields(f, chunks[1], state);
    render_footer(f, chunks[2], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", VitalsTheme::text()),
        Span::styled("Measurements", VitalsTheme::title()),
        Span::styled(
            " │ blank fields are skipped, not zero",
            VitalsTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(VitalsTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            VitalsTheme::border_focused()
        } else {
            VitalsTheme::border()
        };
        let title_style = if is_selected {
            VitalsTheme::focused()
        } else {
            VitalsTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = if field.value.is_empty() {
            Span::styled(field.hint, VitalsTheme::text_muted())
        } else {
            Span::styled(&field.value, VitalsTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", VitalsTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &FormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", VitalsTheme::danger()),
            Span::styled(err.clone(), VitalsTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", VitalsTheme::key_hint()),
            Span::styled("Navigate ", VitalsTheme::key_desc()),
            Span::styled("[Enter] ", VitalsTheme::key_hint()),
            Span::styled("Evaluate ", VitalsTheme::key_desc()),
            Span::styled("[S] ", VitalsTheme::key_hint()),
            Span::styled("Sample ", VitalsTheme::key_desc()),
            Span::styled("[Del] ", VitalsTheme::key_hint()),
            Span::styled("Clear field ", VitalsTheme::key_desc()),
            Span::styled("[Esc] ", VitalsTheme::key_hint()),
            Span::styled("Quit", VitalsTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(VitalsTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_is_empty_input() {
        let state = FormState::default();
        let input = state.to_health_input().expect("Should convert");
        assert!(input.is_empty());
        assert!(input.sex.is_none());
    }

    #[test]
    fn test_sample_data_round_trips() {
        let mut state = FormState::default();
        state.load_sample_data();
        let input = state.to_health_input().expect("Should convert");

        assert_eq!(input.height_cm, Some(175.0));
        assert_eq!(input.sex, Some(Sex::Male));
        assert_eq!(input.glucose_context, Some(GlucoseContext::Fasting));
        assert_eq!(input.triglycerides, Some(120.0));
    }

    #[test]
    fn test_field_kinds_filter_input() {
        let mut state = FormState::default();
        assert!(state.input_char('1'));
        assert!(!state.input_char('x'));

        // Sex field takes a single m/f
        state.selected_field = 3;
        assert!(state.input_char('m'));
        assert!(!state.input_char('f'));
        assert_eq!(state.fields[3].value, "m");
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let mut state = FormState::default();
        state.fields[0].value = "17.5.0".to_string();
        assert!(state.to_health_input().is_err());
    }
}
