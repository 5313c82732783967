use tera::{Context, Tera};

use crate::{report::Report, texts::ANONYMOUS_NAME};

pub const START: &str = "start.txt";
pub const REPORT: &str = "report.txt";
pub const QUESTION: &str = "question.txt";

/// Builds the template set. Nothing is escaped: values are sent as plain text.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(vec![
        (START, include_str!("../templates/start.txt")),
        (REPORT, include_str!("../templates/report.txt")),
        (QUESTION, include_str!("../templates/question.txt")),
    ])?;
    Ok(tera)
}

pub fn render_start(tera: &Tera) -> Result<String, tera::Error> {
    tera.render(START, &Context::new())
}

pub fn render_report(tera: &Tera, report: &Report) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("location", &report.location);
    context.insert("timestamp", &report.timestamp);
    context.insert("reporter_name", &report.reporter_name);
    context.insert("description", &report.description);
    tera.render(REPORT, &context)
}

pub fn render_question(
    tera: &Tera,
    username: Option<&str>,
    question: &str,
) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("username", username.unwrap_or(ANONYMOUS_NAME));
    context.insert("question", question);
    tera.render(QUESTION, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReporterId;

    #[test]
    fn report_matches_fixed_layout() {
        let tera = load().unwrap();
        let report = Report {
            location: "ጎተራ".to_string(),
            timestamp: "2024-05-01T08:30:05.123456".to_string(),
            reporter_id: ReporterId::User(42),
            reporter_name: "abebe".to_string(),
            phone_number: "0911000000".to_string(),
            description: "<b>ትራፊክ</b> & መጨናነቅ".to_string(),
            voice_reference: None,
        };

        assert_eq!(
            render_report(&tera, &report).unwrap(),
            "🚨 አዲስ የትራፊክ ሪፖርት\n\n\
             📍 አካባቢ: ጎተራ\n\
             ⏰ ሰዓት: 2024-05-01T08:30:05.123456\n\
             👤 ሪፖርት ያደረገው: @abebe\n\
             📝 ማብራሪያ: <b>ትራፊክ</b> & መጨናነቅ"
        );
    }

    #[test]
    fn question_without_username_is_anonymous() {
        let tera = load().unwrap();
        assert_eq!(
            render_question(&tera, None, "ሰላም").unwrap(),
            "❓ አዲስ ጥያቄ\n\n👤 ከ: @ስም አልባ\n📝 ጥያቄ: ሰላም"
        );
        assert!(render_question(&tera, Some("abebe"), "q")
            .unwrap()
            .contains("👤 ከ: @abebe"));
    }

    #[test]
    fn start_greets() {
        let tera = load().unwrap();
        assert!(render_start(&tera).unwrap().contains("AutoSafety Reporter Bot"));
    }
}
