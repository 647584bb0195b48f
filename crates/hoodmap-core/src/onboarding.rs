//! Onboarding steps and their validation.

use serde::{Deserialize, Serialize};

pub const MIN_INTERESTS: usize = 1;
pub const MAX_INTERESTS: usize = 5;
pub const NICKNAME_CHARS: std::ops::RangeInclusive<usize> = 2..=16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnboardingStep {
    #[default]
    Welcome,
    Neighborhood,
    Interests,
    Nickname,
    /// Location check shown in a bottom sheet before submitting.
    Verification,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        Self::Welcome,
        Self::Neighborhood,
        Self::Interests,
        Self::Nickname,
        Self::Verification,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// Why the flow refused to advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    NeighborhoodRequired,
    TooFewInterests,
    TooManyInterests,
    NicknameLength,
    NotVerified,
}

impl StepError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NeighborhoodRequired => "Choose your neighborhood",
            Self::TooFewInterests => "Pick at least one interest",
            Self::TooManyInterests => "Pick up to five interests",
            Self::NicknameLength => "Nickname must be 2 to 16 characters",
            Self::NotVerified => "Confirm your neighborhood to continue",
        }
    }
}

/// Body of the onboarding submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OnboardingSubmission {
    pub neighborhood: String,
    pub interests: Vec<String>,
    pub nickname: String,
}

/// Answers collected so far and the current step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    pub neighborhood: Option<String>,
    pub interests: Vec<String>,
    pub nickname: String,
    pub verified: bool,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Add or remove an interest. Adding beyond the maximum is refused.
    pub fn toggle_interest(&mut self, interest: &str) -> Result<(), StepError> {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
            return Ok(());
        }
        if self.interests.len() >= MAX_INTERESTS {
            return Err(StepError::TooManyInterests);
        }
        self.interests.push(interest.to_string());
        Ok(())
    }

    /// Check the current step's answers.
    pub fn validate(&self) -> Result<(), StepError> {
        match self.step {
            OnboardingStep::Welcome => Ok(()),
            OnboardingStep::Neighborhood => match &self.neighborhood {
                Some(n) if !n.trim().is_empty() => Ok(()),
                _ => Err(StepError::NeighborhoodRequired),
            },
            OnboardingStep::Interests => {
                if self.interests.len() < MIN_INTERESTS {
                    Err(StepError::TooFewInterests)
                } else if self.interests.len() > MAX_INTERESTS {
                    Err(StepError::TooManyInterests)
                } else {
                    Ok(())
                }
            }
            OnboardingStep::Nickname => {
                if NICKNAME_CHARS.contains(&self.nickname.trim().chars().count()) {
                    Ok(())
                } else {
                    Err(StepError::NicknameLength)
                }
            }
            OnboardingStep::Verification => {
                if self.verified {
                    Ok(())
                } else {
                    Err(StepError::NotVerified)
                }
            }
        }
    }

    /// Advance if the current step is valid. Returns the new step; on the
    /// last step the step is unchanged and [`submission`](Self::submission)
    /// becomes available.
    pub fn advance(&mut self) -> Result<OnboardingStep, StepError> {
        self.validate()?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> OnboardingStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        if self.step != OnboardingStep::Verification {
            self.verified = false;
        }
        self.step
    }

    /// The final payload, once every step validates.
    pub fn submission(&self) -> Option<OnboardingSubmission> {
        if self.step != OnboardingStep::Verification || self.validate().is_err() {
            return None;
        }
        Some(OnboardingSubmission {
            neighborhood: self.neighborhood.clone()?.trim().to_string(),
            interests: self.interests.clone(),
            nickname: self.nickname.trim().to_string(),
        })
    }
}
