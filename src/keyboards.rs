use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup};

use crate::texts::{
    ANONYMOUS_REPORT_TRIGGER, DESCRIBE_BY_TEXT_BUTTON, DESCRIBE_BY_VOICE_BUTTON, QUESTION_TRIGGER,
    REPORT_TRIGGER, SHARE_PHONE_BUTTON,
};

fn single_column(buttons: Vec<KeyboardButton>) -> KeyboardMarkup {
    let keyboard: Vec<Vec<KeyboardButton>> = buttons.into_iter().map(|b| vec![b]).collect();
    KeyboardMarkup::new(keyboard).resize_keyboard(true)
}

pub fn get_main_keyboard() -> KeyboardMarkup {
    single_column(vec![
        KeyboardButton::new(REPORT_TRIGGER),
        KeyboardButton::new(QUESTION_TRIGGER),
        KeyboardButton::new(ANONYMOUS_REPORT_TRIGGER),
    ])
}

pub fn get_phone_keyboard() -> KeyboardMarkup {
    single_column(vec![
        KeyboardButton::new(SHARE_PHONE_BUTTON).request(ButtonRequest::Contact)
    ])
}

pub fn get_description_keyboard() -> KeyboardMarkup {
    single_column(vec![
        KeyboardButton::new(DESCRIBE_BY_TEXT_BUTTON),
        KeyboardButton::new(DESCRIBE_BY_VOICE_BUTTON),
    ])
}
