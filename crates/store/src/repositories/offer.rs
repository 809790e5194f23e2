use async_trait::async_trait;
use mockall::automock;
use placement_core::{
    errors::{PlacementError, PlacementResult},
    models::application::{ApplicationStatus, Offer, OfferDecision, OfferStatus},
};
use tracing::info;
use uuid::Uuid;

use crate::InMemoryStore;

#[automock]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn offers_for_student(&self, student_id: &str) -> PlacementResult<Vec<Offer>>;

    /// Accepts or declines a pending offer and mirrors the decision onto the
    /// matching application.
    async fn respond(&self, offer_id: Uuid, decision: OfferDecision) -> PlacementResult<Offer>;
}

#[async_trait]
impl OfferRepository for InMemoryStore {
    async fn offers_for_student(&self, student_id: &str) -> PlacementResult<Vec<Offer>> {
        let offers = self.offers.read().await;
        let mut listed: Vec<Offer> = offers
            .values()
            .filter(|o| o.student_id == student_id)
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        Ok(listed)
    }

    async fn respond(&self, offer_id: Uuid, decision: OfferDecision) -> PlacementResult<Offer> {
        let mut applications = self.applications.write().await;
        let mut offers = self.offers.write().await;

        let offer = offers
            .get_mut(&offer_id)
            .ok_or_else(|| PlacementError::NotFound(format!("Offer with ID {} not found", offer_id)))?;

        if offer.status != OfferStatus::Pending {
            return Err(PlacementError::Conflict(format!(
                "Offer {} has already been {:?}",
                offer_id, offer.status
            )));
        }

        offer.status = decision.into();

        let application_status = match decision {
            OfferDecision::Accept => ApplicationStatus::Accepted,
            OfferDecision::Decline => ApplicationStatus::Declined,
        };
        if let Some(application) = applications
            .iter_mut()
            .find(|a| a.drive_id == offer.drive_id && a.student_id == offer.student_id)
        {
            application.status = application_status;
            application.next_step = None;
        }

        info!(%offer_id, ?decision, "Offer response recorded");
        Ok(offer.clone())
    }
}
