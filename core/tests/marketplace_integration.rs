//! Integration tests wiring the core services over the in-memory stores

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use tc_core::domain::entities::{PaymentOrder, TutorProfileUpdate, UserRole};
    use tc_core::errors::DomainError;
    use tc_core::repositories::{
        InMemoryFavoriteRepository, InMemoryMessageRepository, InMemoryOtpStore,
        InMemoryUserRepository,
    };
    use tc_core::services::{
        AuthService, AuthServiceConfig, FavoritesService, MessagingService, OtpService,
        OtpServiceConfig, PaymentGateway, PaymentService, PaymentServiceConfig, RegisterInput,
        ReviewService, SmsServiceTrait, TokenService, TokenServiceConfig, TutorFilter,
        TutorService,
    };

    #[derive(Default)]
    struct CapturingSms {
        last_code: Mutex<Option<String>>,
    }

    #[async_trait]
    impl SmsServiceTrait for CapturingSms {
        async fn send_verification_code(&self, _phone: &str, code: &str) -> Result<String, String> {
            *self.last_code.lock().unwrap() = Some(code.to_string());
            Ok("sms-1".to_string())
        }
    }

    struct ApprovingGateway;

    #[async_trait]
    impl PaymentGateway for ApprovingGateway {
        async fn create_order(
            &self,
            amount: u64,
            currency: &str,
            receipt: &str,
        ) -> Result<PaymentOrder, DomainError> {
            Ok(PaymentOrder {
                id: "order_it".to_string(),
                amount,
                currency: currency.to_string(),
                receipt: receipt.to_string(),
            })
        }

        fn verify_signature(&self, _order_id: &str, _payment_id: &str, signature: &str) -> bool {
            signature == "valid"
        }
    }

    struct Services {
        auth: AuthService,
        otp: OtpService,
        sms: Arc<CapturingSms>,
        tutors: TutorService,
        payment: PaymentService,
        favorites: FavoritesService,
        reviews: ReviewService,
        messaging: MessagingService,
    }

    fn services() -> Services {
        let users = Arc::new(InMemoryUserRepository::new());
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));
        let sms = Arc::new(CapturingSms::default());
        Services {
            auth: AuthService::new(
                users.clone(),
                tokens,
                AuthServiceConfig {
                    bcrypt_cost: 4,
                    ..Default::default()
                },
            ),
            otp: OtpService::new(
                Arc::new(InMemoryOtpStore::new()),
                sms.clone(),
                users.clone(),
                OtpServiceConfig::default(),
            ),
            sms,
            tutors: TutorService::new(users.clone()),
            payment: PaymentService::new(
                Arc::new(ApprovingGateway),
                users.clone(),
                PaymentServiceConfig::default(),
            ),
            favorites: FavoritesService::new(Arc::new(InMemoryFavoriteRepository::new()), users.clone()),
            reviews: ReviewService::new(users.clone(), users.clone()),
            messaging: MessagingService::new(Arc::new(InMemoryMessageRepository::new()), users),
        }
    }

    fn register(name: &str, role: UserRole) -> RegisterInput {
        RegisterInput {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "secret123".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_tutor_onboarding_to_parent_contact() {
        let s = services();

        let tutor = s.auth.register(register("Meera", UserRole::Tutor)).await.unwrap().user;
        let parent = s.auth.register(register("Ravi", UserRole::Parent)).await.unwrap().user;

        // Phone verification attaches the number to the tutor
        s.otp.issue("9876543210").await.unwrap();
        let code = s.sms.last_code.lock().unwrap().clone().unwrap();
        let verified = s.otp.verify("9876543210", &code, Some(tutor.id)).await.unwrap();
        assert!(verified.user.unwrap().phone_verified);

        // Not listed until the profile is complete and the fee is paid
        s.tutors
            .update_tutor_profile(
                tutor.id,
                TutorProfileUpdate {
                    subjects: Some(vec!["Physics".into()]),
                    qualifications: Some("B.Tech".into()),
                    monthly_rate: Some(4500),
                    bio: Some("JEE coaching".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(s.tutors.list_tutors(&TutorFilter::default()).await.unwrap().is_empty());

        let order = s.payment.create_registration_order(tutor.id).await.unwrap().order;
        s.payment
            .verify_registration_payment(tutor.id, &order.id, "pay_it", "valid")
            .await
            .unwrap();
        let listed = s.tutors.list_tutors(&TutorFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, tutor.id);

        // Parent shortlists, reviews and writes to the tutor
        assert!(s.favorites.toggle_favorite(parent.id, tutor.id).await.unwrap());
        s.reviews.add_or_update_review(tutor.id, parent.id, 5, "Clear explanations").await.unwrap();
        assert_eq!(s.tutors.get_tutor(tutor.id).await.unwrap().rating, 5.0);

        let message = s.messaging.send_message(parent.id, tutor.id, "Are you free on Saturdays?").await.unwrap();
        assert_eq!(s.messaging.unread_total(tutor.id).await.unwrap(), 1);

        let inbox = s.messaging.list_conversations(tutor.id).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].other_participant.id, parent.id);
        assert_eq!(inbox[0].unread_count, 1);

        let thread = s
            .messaging
            .get_conversation_messages(tutor.id, &message.conversation_id)
            .await
            .unwrap();
        assert!(thread.iter().all(|m| m.read));
        assert_eq!(s.messaging.unread_total(tutor.id).await.unwrap(), 0);
    }
}
