//! User entity representing a registered parent or tutor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::review::ReviewSummary;

/// Represents the role of a user in the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A parent looking for tutors
    Parent,
    /// A tutor offering classes
    Tutor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Parent => "parent",
            UserRole::Tutor => "tutor",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parent" => Ok(UserRole::Parent),
            "tutor" => Ok(UserRole::Tutor),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// How the account authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}

impl std::str::FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            _ => Err(format!("Invalid auth provider: {}", s)),
        }
    }
}

/// Registration fee state of a tutor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

/// One-time registration payment of a tutor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistrationPayment {
    pub status: PaymentStatus,
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Tutor-only profile fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TutorProfile {
    /// Subjects taught; kept free of duplicates
    pub subjects: Vec<String>,
    pub qualifications: String,
    /// Monthly fee in whole rupees
    pub monthly_rate: u32,
    pub bio: String,
    pub classes: Vec<String>,
    pub available_time_slots: Vec<String>,
    pub location: Option<String>,
    pub profile_completed: bool,
    pub payment: RegistrationPayment,
}

impl TutorProfile {
    /// A profile is complete once the fields parents filter and read on are set
    pub fn compute_completed(&self) -> bool {
        !self.subjects.is_empty()
            && !self.bio.trim().is_empty()
            && !self.qualifications.trim().is_empty()
            && self.monthly_rate > 0
    }

    /// Whether the tutor shows up in public listings
    pub fn is_listed(&self) -> bool {
        self.profile_completed && self.payment.status == PaymentStatus::Paid
    }

    pub fn teaches_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s.eq_ignore_ascii_case(subject))
    }

    pub fn teaches_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c.eq_ignore_ascii_case(class))
    }
}

/// Partial update of a tutor profile; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorProfileUpdate {
    pub subjects: Option<Vec<String>>,
    pub qualifications: Option<String>,
    pub monthly_rate: Option<u32>,
    pub bio: Option<String>,
    pub classes: Option<Vec<String>>,
    pub available_time_slots: Option<Vec<String>>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    pub name: String,

    /// Lower-cased, unique
    pub email: String,

    /// bcrypt hash; `None` for social accounts
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    pub role: UserRole,

    pub auth_provider: AuthProvider,

    pub phone: Option<String>,

    pub phone_verified: bool,

    pub profile_picture: Option<String>,

    /// Present for tutors only
    pub tutor_profile: Option<TutorProfile>,

    /// Mean of all review ratings
    pub rating: f64,

    pub review_count: u32,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a user that signs in with email and password
    pub fn new_local(name: String, email: String, password_hash: String, role: UserRole) -> Self {
        Self::build(name, email, Some(password_hash), role, AuthProvider::Local, None)
    }

    /// Creates a user on first OAuth login
    pub fn new_google(
        name: String,
        email: String,
        profile_picture: Option<String>,
        role: UserRole,
    ) -> Self {
        Self::build(name, email, None, role, AuthProvider::Google, profile_picture)
    }

    fn build(
        name: String,
        email: String,
        password_hash: Option<String>,
        role: UserRole,
        auth_provider: AuthProvider,
        profile_picture: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            auth_provider,
            phone: None,
            phone_verified: false,
            profile_picture,
            tutor_profile: match role {
                UserRole::Tutor => Some(TutorProfile::default()),
                UserRole::Parent => None,
            },
            rating: 0.0,
            review_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_tutor(&self) -> bool {
        self.role == UserRole::Tutor
    }

    pub fn is_parent(&self) -> bool {
        self.role == UserRole::Parent
    }

    /// Whether the tutor shows up in public listings
    pub fn is_listed_tutor(&self) -> bool {
        self.is_tutor() && self.tutor_profile.as_ref().is_some_and(TutorProfile::is_listed)
    }

    /// Stores a phone number that passed OTP verification
    pub fn verify_phone(&mut self, phone: String) {
        self.phone = Some(phone);
        self.phone_verified = true;
        self.updated_at = Utc::now();
    }

    /// Applies a profile patch and recomputes the completion flag.
    ///
    /// Returns `false` without touching the record if the user is not a tutor.
    pub fn apply_profile_update(&mut self, update: TutorProfileUpdate) -> bool {
        if !self.is_tutor() {
            return false;
        }
        if let Some(picture) = update.profile_picture {
            self.profile_picture = Some(picture);
        }
        let profile = self.tutor_profile.get_or_insert_with(TutorProfile::default);
        if let Some(subjects) = update.subjects {
            let mut cleaned: Vec<String> = Vec::with_capacity(subjects.len());
            for subject in subjects {
                let subject = subject.trim().to_string();
                if !subject.is_empty() && !cleaned.iter().any(|s| s.eq_ignore_ascii_case(&subject)) {
                    cleaned.push(subject);
                }
            }
            profile.subjects = cleaned;
        }
        if let Some(qualifications) = update.qualifications {
            profile.qualifications = qualifications;
        }
        if let Some(rate) = update.monthly_rate {
            profile.monthly_rate = rate;
        }
        if let Some(bio) = update.bio {
            profile.bio = bio;
        }
        if let Some(classes) = update.classes {
            profile.classes = classes;
        }
        if let Some(slots) = update.available_time_slots {
            profile.available_time_slots = slots;
        }
        if let Some(location) = update.location {
            profile.location = Some(location);
        }
        profile.profile_completed = profile.compute_completed();
        self.updated_at = Utc::now();
        true
    }

    /// Records a verified registration payment
    pub fn mark_registration_paid(&mut self, order_id: String, payment_id: String) {
        let profile = self.tutor_profile.get_or_insert_with(TutorProfile::default);
        profile.payment = RegistrationPayment {
            status: PaymentStatus::Paid,
            order_id: Some(order_id),
            payment_id: Some(payment_id),
            paid_at: Some(Utc::now()),
        };
        self.updated_at = Utc::now();
    }

    /// Remembers the gateway order created for the registration fee
    pub fn attach_registration_order(&mut self, order_id: String) {
        let profile = self.tutor_profile.get_or_insert_with(TutorProfile::default);
        profile.payment.order_id = Some(order_id);
        self.updated_at = Utc::now();
    }

    pub fn has_paid_registration(&self) -> bool {
        self.tutor_profile
            .as_ref()
            .is_some_and(|p| p.payment.status == PaymentStatus::Paid)
    }

    /// Overwrites the denormalized review aggregate
    pub fn apply_review_summary(&mut self, summary: ReviewSummary) {
        self.rating = summary.rating;
        self.review_count = summary.review_count;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor() -> User {
        User::new_local(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            "hash".to_string(),
            UserRole::Tutor,
        )
    }

    #[test]
    fn test_new_local_user() {
        let user = User::new_local(
            "Ravi".to_string(),
            "ravi@example.com".to_string(),
            "hash".to_string(),
            UserRole::Parent,
        );
        assert!(user.is_parent());
        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert!(user.tutor_profile.is_none());
        assert!(!user.phone_verified);
        assert_eq!(user.review_count, 0);
    }

    #[test]
    fn test_new_tutor_gets_empty_profile() {
        let user = tutor();
        let profile = user.tutor_profile.as_ref().unwrap();
        assert!(!profile.profile_completed);
        assert_eq!(profile.payment.status, PaymentStatus::Pending);
        assert!(!user.is_listed_tutor());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(tutor()).unwrap();
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_profile_update_recomputes_completion() {
        let mut user = tutor();
        let applied = user.apply_profile_update(TutorProfileUpdate {
            subjects: Some(vec!["Maths".into(), " maths ".into(), "Physics".into()]),
            qualifications: Some("M.Sc".into()),
            monthly_rate: Some(2000),
            bio: Some("Ten years of teaching".into()),
            ..Default::default()
        });
        assert!(applied);
        let profile = user.tutor_profile.as_ref().unwrap();
        assert_eq!(profile.subjects, vec!["Maths".to_string(), "Physics".to_string()]);
        assert!(profile.profile_completed);

        user.apply_profile_update(TutorProfileUpdate {
            monthly_rate: Some(0),
            ..Default::default()
        });
        assert!(!user.tutor_profile.as_ref().unwrap().profile_completed);
    }

    #[test]
    fn test_profile_update_rejected_for_parent() {
        let mut parent = User::new_google(
            "P".into(),
            "p@example.com".into(),
            None,
            UserRole::Parent,
        );
        assert!(!parent.apply_profile_update(TutorProfileUpdate::default()));
        assert!(parent.tutor_profile.is_none());
    }

    #[test]
    fn test_listing_requires_payment_and_completion() {
        let mut user = tutor();
        user.apply_profile_update(TutorProfileUpdate {
            subjects: Some(vec!["English".into()]),
            qualifications: Some("B.Ed".into()),
            monthly_rate: Some(1500),
            bio: Some("Patient".into()),
            ..Default::default()
        });
        assert!(!user.is_listed_tutor());
        user.mark_registration_paid("order_1".into(), "pay_1".into());
        assert!(user.has_paid_registration());
        assert!(user.is_listed_tutor());
    }

    #[test]
    fn test_verify_phone() {
        let mut user = tutor();
        user.verify_phone("9876543210".into());
        assert_eq!(user.phone.as_deref(), Some("9876543210"));
        assert!(user.phone_verified);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Tutor".parse::<UserRole>(), Ok(UserRole::Tutor));
        assert!("admin".parse::<UserRole>().is_err());
    }
}
