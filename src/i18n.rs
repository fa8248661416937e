//! User-visible strings in the supported languages.

use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ru]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}

/// String catalog for one locale
#[derive(Debug)]
pub struct Messages {
    // Validation
    pub name_too_short: &'static str,
    pub phone_invalid: &'static str,
    pub message_too_short: &'static str,

    // Submission outcomes
    pub fix_and_retry: &'static str,
    pub server_error: &'static str,
    pub connection_failed: &'static str,
    pub sent: &'static str,

    // Welcome view
    pub welcome_title: &'static str,
    pub welcome_body: &'static str,
    pub next: &'static str,

    // Form view
    pub form_title: &'static str,
    pub name_label: &'static str,
    pub name_hint: &'static str,
    pub phone_label: &'static str,
    pub phone_format: &'static str,
    pub message_label: &'static str,
    pub message_hint: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub back: &'static str,

    // Status bar
    pub status_fix_fields: &'static str,
    pub status_sending_to: &'static str,
    pub status_sent: &'static str,
    pub status_not_sent: &'static str,
}

pub static EN: Messages = Messages {
    name_too_short: "Name must be at least 2 characters",
    phone_invalid: "Phone must be in the format +375XXXXXXXXX or 80XXXXXXXXX",
    message_too_short: "Message must be at least 2 characters",

    fix_and_retry: "fix errors and retry",
    server_error: "server error",
    connection_failed: "could not reach server",
    sent: "Message sent successfully!",

    welcome_title: "Hello!",
    welcome_body: "Welcome! Here you can quickly and easily **send us a message**.",
    next: "Next →",

    form_title: "Send a message",
    name_label: "Name",
    name_hint: "Enter your name",
    phone_label: "Phone",
    phone_format: "Format: +375XXXXXXXXX or 80XXXXXXXXX",
    message_label: "Message",
    message_hint: "Enter your message",
    send: "Send",
    sending: "Sending...",
    back: "Back",

    status_fix_fields: "Please correct the highlighted fields",
    status_sending_to: "Sending to",
    status_sent: "Message sent",
    status_not_sent: "Message not sent",
};

pub static RU: Messages = Messages {
    name_too_short: "Имя минимум 2 символа",
    phone_invalid: "Телефон должен быть в формате +375XXXXXXXXX или 80XXXXXXXXX",
    message_too_short: "Сообщение минимум 2 символа",

    fix_and_retry: "Исправьте ошибки и попробуйте ещё раз",
    server_error: "Ошибка сервера",
    connection_failed: "Не удалось подключиться к серверу",
    sent: "Сообщение успешно отправлено!",

    welcome_title: "Привет!",
    welcome_body: "Добро пожаловать в наше приложение! Здесь ты можешь быстро и удобно **отправить сообщение**.",
    next: "Далее →",

    form_title: "Отправить сообщение",
    name_label: "Имя",
    name_hint: "Введите имя",
    phone_label: "Телефон",
    phone_format: "Формат: +375XXXXXXXXX или 80XXXXXXXXX",
    message_label: "Сообщение",
    message_hint: "Введите сообщение",
    send: "Отправить",
    sending: "Отправка...",
    back: "Назад",

    status_fix_fields: "Исправьте отмеченные поля",
    status_sending_to: "Отправка на",
    status_sent: "Сообщение отправлено",
    status_not_sent: "Сообщение не отправлено",
};
