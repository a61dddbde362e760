use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display metadata for a plan sold by the studio. Rendering only; the
/// ledgers persist plan ids, never this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferCatalogItem {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub subtitle: String,
}

fn item(id: &str, name: &str, amount: &str, subtitle: &str) -> OfferCatalogItem {
    OfferCatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        amount: amount.to_string(),
        subtitle: subtitle.to_string(),
    }
}

/// Static plan catalog keyed by plan id.
pub struct OfferCatalog {
    items: HashMap<String, OfferCatalogItem>,
    default_offer: OfferCatalogItem,
}

impl OfferCatalog {
    /// The studio's standard offering: four session packs and two
    /// subscriptions.
    pub fn standard() -> Self {
        let default_offer = item(
            "pack-20",
            "Pack 20 séances",
            "280 crédits",
            "20 séances · Validité 4 mois",
        );

        let plans = [
            item(
                "pack-1",
                "Séance à l’unité",
                "14 crédits",
                "1 séance · Validité 7 jours",
            ),
            item(
                "pack-10",
                "Pack 10 séances",
                "140 crédits",
                "10 séances · Validité 2 mois",
            ),
            default_offer.clone(),
            item(
                "pack-40",
                "Pack 40 séances",
                "560 crédits",
                "40 séances · Validité 8 mois",
            ),
            item(
                "abonnement-mensuel",
                "Abonnement Mensuel",
                "120 crédits",
                "Validité 30 jours",
            ),
            item(
                "abonnement-trimestriel",
                "Abonnement Trimestriel",
                "390 crédits",
                "Validité 90 jours",
            ),
        ];

        let items = plans
            .into_iter()
            .map(|plan| (plan.id.clone(), plan))
            .collect();

        Self {
            items,
            default_offer,
        }
    }

    pub fn get(&self, plan_id: &str) -> Option<&OfferCatalogItem> {
        self.items.get(plan_id)
    }

    /// Falls back to the default plan when `plan_id` is unknown.
    pub fn get_or_default(&self, plan_id: &str) -> &OfferCatalogItem {
        self.items.get(plan_id).unwrap_or(&self.default_offer)
    }

    pub fn default_offer(&self) -> &OfferCatalogItem {
        &self.default_offer
    }

    pub fn iter(&self) -> impl Iterator<Item = &OfferCatalogItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for OfferCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
