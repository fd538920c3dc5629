//! Five-question gate in front of the gift.
//!
//! Steps are strictly linear. Moving forward requires the current answer to
//! validate, moving back is always allowed, and answers survive both.

use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

use crate::config;
use crate::error::ValidationError;
use crate::geo::AnswerZone;

const RETRY: &str = "Кажется, не совсем 💋 Попробуй ещё раз";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Q1, Field::Q2, Field::Q3, Field::Q4, Field::Q5];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Field::Q1 => "Вопрос 1",
            Field::Q2 => "Вопрос 2",
            Field::Q3 => "Вопрос 3",
            Field::Q4 => "Вопрос 4",
            Field::Q5 => "Вопрос 5",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: [String; 5],
}

impl Answers {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
    }
}

pub fn validate(field: Field, answers: &Answers) -> Result<(), ValidationError> {
    let raw = answers.get(field);
    match field {
        Field::Q1 => validate_first_date(raw),
        Field::Q2 => validate_age(raw),
        Field::Q3 => validate_happiness(raw),
        Field::Q4 => validate_song(raw),
        Field::Q5 => AnswerZone::new(config::CITY_TARGET, config::CITY_RADIUS_KM)
            .check_field(raw)
            .map(|_| ()),
    }
}

/// Validates every field, returning the first failure in question order.
pub fn validate_all(answers: &Answers) -> Result<(), (Field, ValidationError)> {
    Field::ALL
        .iter()
        .try_for_each(|&f| validate(f, answers).map_err(|e| (f, e)))
}

fn validate_first_date(raw: &str) -> Result<(), ValidationError> {
    let answer = raw.to_lowercase();
    if answer.is_empty() {
        return Err(ValidationError::Missing("Жан, напиши ответ 💋"));
    }
    if answer != "b" {
        return Err(ValidationError::Incorrect(RETRY));
    }
    Ok(())
}

fn validate_age(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Missing("Напиши хоть что-нибудь 🙂"));
    }
    let age = parse_int_prefix(raw).ok_or(ValidationError::Incorrect("Напиши в цифрах 💋"))?;
    if raw.chars().count() < 2 {
        return Err(ValidationError::Incorrect("мне не настолько мало 🙃"));
    }
    // A string like "25 лет" has an integer prefix but no numeric value;
    // the range hints are skipped for it.
    if let Some(value) = numeric_value(raw) {
        if value < 21.0 {
            return Err(ValidationError::Incorrect("спасибо, но я тебя старше 👴"));
        }
        if value > 26.0 {
            return Err(ValidationError::Incorrect(
                "Мужчина с годами как вино - только слаще 😎",
            ));
        }
    }
    if age != 25.0 {
        return Err(ValidationError::Incorrect(RETRY));
    }
    Ok(())
}

fn validate_happiness(raw: &str) -> Result<(), ValidationError> {
    let answer = raw.to_lowercase();
    if answer.is_empty() {
        return Err(ValidationError::Missing("Напиши, что ты думаешь 🙂"));
    }
    if !answer.contains("999") {
        return Err(ValidationError::Incorrect(
            "Подсказка: посмотри внимательно на график 😌",
        ));
    }
    Ok(())
}

fn validate_song(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Missing("Выбери песню 🙂"));
    }
    if raw != "s1" {
        return Err(ValidationError::Incorrect(
            "Это песня была супер, но чаще я слушал другую 💋 Попробуй ещё раз",
        ));
    }
    Ok(())
}

/// Leading integer of `raw`: optional whitespace and sign, then digits.
/// Anything after the digits is ignored. Digit runs too long for an integer
/// still produce a (large) value instead of failing.
pub fn parse_int_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<f64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Whole-string numeric value. Blank input counts as zero and overflow
/// becomes infinity.
fn numeric_value(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

pub fn progress_percent(step: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * (step + 1) as f64 / total as f64).round() as u32
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    step: usize,
    answers: Answers,
    errors: [Option<ValidationError>; 5],
}

impl QuizState {
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        Field::ALL.len()
    }

    pub fn current_field(&self) -> Field {
        Field::ALL[self.step]
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 == self.total()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors[field.index()].as_ref()
    }

    pub fn progress_percent(&self) -> u32 {
        progress_percent(self.step, self.total())
    }

    /// Stores an answer. A field that is already showing an error is
    /// re-checked right away so the message tracks the input.
    pub fn set_answer(&mut self, field: Field, value: String) {
        self.answers.set(field, value);
        if self.errors[field.index()].is_some() {
            self.errors[field.index()] = validate(field, &self.answers).err();
        }
    }

    pub fn validate_current(&mut self) -> Result<(), ValidationError> {
        let field = self.current_field();
        let result = validate(field, &self.answers);
        self.errors[field.index()] = result.clone().err();
        result
    }

    pub fn next(&mut self) -> Result<usize, ValidationError> {
        self.validate_current()?;
        self.step = (self.step + 1).min(self.total() - 1);
        debug!("Quiz advanced to step {}", self.step);
        Ok(self.step)
    }

    /// Returns false when already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.step -= 1;
        debug!("Quiz went back to step {}", self.step);
        true
    }

    /// Final gate. On the last step every field is re-checked and errors
    /// recorded. Before that only the current field is checked, so steps the
    /// visitor has not reached stay clean. The step never changes here.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        if !self.is_last() {
            debug!("Submit ignored on step {}", self.step);
            self.validate_current()?;
            return validate_all(&self.answers).map_err(|(_, e)| e);
        }
        for field in Field::ALL {
            self.errors[field.index()] = validate(field, &self.answers).err();
        }
        match validate_all(&self.answers) {
            Ok(()) => {
                info!("Quiz submitted with all answers correct");
                Ok(())
            }
            Err((field, e)) => {
                info!("Quiz submit blocked by {:?}", field);
                Err(e)
            }
        }
    }
}

pub enum QuizAction {
    Answer(Field, String),
    Validate,
    Next,
    Prev,
    Submit,
}

impl Reducible for QuizState {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            QuizAction::Answer(field, value) => state.set_answer(field, value),
            QuizAction::Validate => {
                let _ = state.validate_current();
            }
            QuizAction::Next => {
                let _ = state.next();
            }
            QuizAction::Prev => {
                state.prev();
            }
            QuizAction::Submit => {
                let _ = state.submit();
            }
        }
        Rc::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved() -> QuizState {
        let mut quiz = QuizState::default();
        quiz.set_answer(Field::Q1, "b".into());
        quiz.set_answer(Field::Q2, "25".into());
        quiz.set_answer(Field::Q3, "в 999 раз".into());
        quiz.set_answer(Field::Q4, "s1".into());
        quiz.set_answer(Field::Q5, "52.3,104.2".into());
        quiz
    }

    #[test]
    fn test_progress_percent_matches_step() {
        let expected = [20, 40, 60, 80, 100];
        for (step, pct) in expected.iter().enumerate() {
            assert_eq!(progress_percent(step, 5), *pct);
        }
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
    }

    #[test]
    fn test_next_blocks_on_invalid_answer() {
        let mut quiz = QuizState::default();
        assert_eq!(
            quiz.next(),
            Err(ValidationError::Missing("Жан, напиши ответ 💋"))
        );
        assert_eq!(quiz.step(), 0);
        assert!(quiz.error(Field::Q1).is_some());

        quiz.set_answer(Field::Q1, "a".into());
        assert_eq!(quiz.error(Field::Q1), Some(&ValidationError::Incorrect(RETRY)));

        quiz.set_answer(Field::Q1, "B".into());
        assert_eq!(quiz.error(Field::Q1), None);
        assert_eq!(quiz.next(), Ok(1));
    }

    #[test]
    fn test_prev_is_noop_on_first_step() {
        let mut quiz = QuizState::default();
        assert!(!quiz.prev());
        assert_eq!(quiz.step(), 0);
    }

    #[test]
    fn test_answers_survive_navigation() {
        let mut quiz = solved();
        quiz.next().unwrap();
        quiz.next().unwrap();
        assert!(quiz.prev());
        assert!(quiz.prev());
        assert_eq!(quiz.answers().get(Field::Q2), "25");
        assert_eq!(quiz.answers().get(Field::Q3), "в 999 раз");
        assert_eq!(quiz.next(), Ok(1));
    }

    #[test]
    fn test_next_saturates_at_last_step() {
        let mut quiz = solved();
        for _ in 0..10 {
            let _ = quiz.next();
        }
        assert_eq!(quiz.step(), 4);
        assert!(quiz.is_last());
        assert_eq!(quiz.progress_percent(), 100);
    }

    #[test]
    fn test_submit_with_first_step_invalid_keeps_step() {
        let mut quiz = solved();
        quiz.set_answer(Field::Q1, String::new());
        assert!(quiz.submit().is_err());
        assert_eq!(quiz.step(), 0);
        assert!(quiz.error(Field::Q1).is_some());
        assert!(quiz.error(Field::Q5).is_none());
    }

    #[test]
    fn test_submit_before_last_step_leaves_later_fields_clean() {
        let state = Rc::new(QuizState::default());
        let state = state.reduce(QuizAction::Answer(Field::Q1, "b".into()));
        let state = state.reduce(QuizAction::Next);
        let state = state.reduce(QuizAction::Answer(Field::Q2, "43".into()));
        let state = state.reduce(QuizAction::Submit);
        assert_eq!(state.step(), 1);
        assert!(state.error(Field::Q2).is_some());
        for field in [Field::Q3, Field::Q4, Field::Q5] {
            assert_eq!(state.error(field), None, "{:?}", field);
        }

        let mut quiz = solved();
        quiz.next().unwrap();
        assert!(quiz.submit().is_ok());
        assert_eq!(quiz.step(), 1);
    }

    #[test]
    fn test_submit_on_last_step_flags_every_field() {
        let mut quiz = solved();
        for _ in 0..4 {
            quiz.next().unwrap();
        }
        quiz.set_answer(Field::Q3, String::new());
        quiz.set_answer(Field::Q4, "s2".into());
        assert!(quiz.submit().is_err());
        assert_eq!(quiz.step(), 4);
        assert!(quiz.error(Field::Q3).is_some());
        assert!(quiz.error(Field::Q4).is_some());
        assert_eq!(quiz.error(Field::Q5), None);
    }

    #[test]
    fn test_submit_checks_map_answer_too() {
        let mut quiz = solved();
        quiz.set_answer(Field::Q5, "49.19,16.60".into());
        assert!(matches!(
            quiz.submit(),
            Err(ValidationError::OutsideRadius { .. })
        ));
        assert!(solved().submit().is_ok());
    }

    #[test]
    fn test_age_hints_follow_rule_order() {
        let check = |raw: &str| validate_age(raw).map_err(|e| e.to_string());
        assert_eq!(check(""), Err("Напиши хоть что-нибудь 🙂".into()));
        assert_eq!(check("abc"), Err("Напиши в цифрах 💋".into()));
        assert_eq!(check("5"), Err("мне не настолько мало 🙃".into()));
        assert_eq!(check("18"), Err("спасибо, но я тебя старше 👴".into()));
        assert_eq!(check("43"), Err("Мужчина с годами как вино - только слаще 😎".into()));
        assert_eq!(check("24"), Err(RETRY.into()));
        assert_eq!(check("25"), Ok(()));
        assert_eq!(check("25 лет"), Ok(()));
        assert_eq!(check("19 лет"), Err(RETRY.into()));
    }

    #[test]
    fn test_age_overflowing_digits_still_count_as_number() {
        let check = |raw: &str| validate_age(raw).map_err(|e| e.to_string());
        let too_old = Err("Мужчина с годами как вино - только слаще 😎".to_string());
        assert_eq!(check("99999999999999999999"), too_old);
        assert_eq!(check(&"9".repeat(400)), too_old);
        assert_eq!(check("-99999999999999999999"), Err("спасибо, но я тебя старше 👴".into()));
        assert_eq!(check("99999999999999999999 лет"), Err(RETRY.into()));
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("25"), Some(25.0));
        assert_eq!(parse_int_prefix("  -7x"), Some(-7.0));
        assert_eq!(parse_int_prefix("+3"), Some(3.0));
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(1e20));
        assert_eq!(parse_int_prefix("x3"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_happiness_and_song_rules() {
        assert!(validate_happiness("999").is_ok());
        assert!(validate_happiness("в 999 раз!").is_ok());
        assert!(validate_happiness("1000").is_err());
        assert!(validate_song("s1").is_ok());
        assert_eq!(
            validate_song("s2").map_err(|e| e.to_string()),
            Err("Это песня была супер, но чаще я слушал другую 💋 Попробуй ещё раз".into())
        );
    }

    #[test]
    fn test_reducer_drives_state() {
        let state = Rc::new(QuizState::default());
        let state = state.reduce(QuizAction::Next);
        assert_eq!(state.step(), 0);
        let state = state.reduce(QuizAction::Answer(Field::Q1, "b".into()));
        let state = state.reduce(QuizAction::Next);
        assert_eq!(state.step(), 1);
        let state = state.reduce(QuizAction::Prev);
        assert_eq!(state.step(), 0);
        assert_eq!(state.answers().get(Field::Q1), "b");
    }
}
