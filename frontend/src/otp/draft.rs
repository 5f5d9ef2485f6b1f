use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::api::RegisterRequest;

pub const MIN_PASSWORD_LEN: usize = 8;

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
        .as_ref()
}

fn is_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// `local@domain.tld` after trimming.
pub fn validate_email(raw: &str) -> Result<String, String> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email is required".into());
    }
    if !is_email(email) {
        return Err("Please enter a valid email address".into());
    }
    Ok(email.to_string())
}

pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

/// Raw register form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub birth_day: String,
    pub birth_month: String,
}

/// Registration data held in memory until the e-mail is verified.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub birth_day: u32,
    pub birth_month: u32,
}

impl std::fmt::Debug for RegistrationDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationDraft")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn parse_number(raw: &str, field: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("{} must be a number", field))
}

impl RegistrationDraft {
    pub fn from_form(form: &RegisterForm) -> Result<Self, String> {
        let first_name = form.first_name.trim();
        if first_name.is_empty() {
            return Err("First name is required".into());
        }
        let last_name = form.last_name.trim();
        if last_name.is_empty() {
            return Err("Last name is required".into());
        }
        let email = validate_email(&form.email)?;
        validate_new_password(&form.password, &form.confirm_password)?;

        let age = parse_number(&form.age, "Age")?;
        if !(1..=120).contains(&age) {
            return Err("Age must be between 1 and 120".into());
        }
        let birth_day = parse_number(&form.birth_day, "Birth day")?;
        let birth_month = parse_number(&form.birth_month, "Birth month")?;
        if !(1..=12).contains(&birth_month) {
            return Err("Birth month must be between 1 and 12".into());
        }
        // 2000 is a leap year, so 29 February is accepted
        if NaiveDate::from_ymd_opt(2000, birth_month, birth_day).is_none() {
            return Err("Birth day is not valid for that month".into());
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email,
            password: form.password.clone(),
            age,
            birth_day,
            birth_month,
        })
    }

    pub fn into_register_request(self, otp: String) -> RegisterRequest {
        RegisterRequest {
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            otp,
            day: self.birth_day,
            month: self.birth_month,
        }
    }
}
