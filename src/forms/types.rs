//! Type definitions for the signup and login forms

use std::collections::BTreeMap;

use crate::auth::SignupRequest;

/// Field-level validation messages, keyed by draft field
pub type ValidationErrors = BTreeMap<SignupField, String>;

/// One field of the signup draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    RestaurantName,
    RestaurantType,
    Address,
    City,
    ZipCode,
    Phone,
    OwnerName,
    Email,
    Password,
    ConfirmPassword,
    AgreeToTerms,
    AgreeToMarketing,
}

/// Restaurant categories offered by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantType {
    Traditional,
    FastFood,
    Cafe,
    Pizza,
    Burger,
    Asian,
    Italian,
    Confectionery,
    FoodTruck,
    Bar,
    Other,
}

impl RestaurantType {
    pub fn all() -> &'static [RestaurantType] {
        &[
            RestaurantType::Traditional,
            RestaurantType::FastFood,
            RestaurantType::Cafe,
            RestaurantType::Pizza,
            RestaurantType::Burger,
            RestaurantType::Asian,
            RestaurantType::Italian,
            RestaurantType::Confectionery,
            RestaurantType::FoodTruck,
            RestaurantType::Bar,
            RestaurantType::Other,
        ]
    }

    /// Display label, as the platform shows it
    pub fn label(&self) -> &'static str {
        match self {
            RestaurantType::Traditional => "رستوران سنتی",
            RestaurantType::FastFood => "فست فود",
            RestaurantType::Cafe => "کافه",
            RestaurantType::Pizza => "پیتزا",
            RestaurantType::Burger => "برگر",
            RestaurantType::Asian => "غذای آسیایی",
            RestaurantType::Italian => "غذای ایتالیایی",
            RestaurantType::Confectionery => "قنادی",
            RestaurantType::FoodTruck => "فود ترک",
            RestaurantType::Bar => "بار",
            RestaurantType::Other => "سایر",
        }
    }

    /// Look up a category by its label; the draft stores the label string
    pub fn from_label(label: &str) -> Option<RestaurantType> {
        RestaurantType::all()
            .iter()
            .copied()
            .find(|t| t.label() == label)
    }
}

/// In-progress signup form data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupDraft {
    pub restaurant_name: String,
    /// Selected category label; empty until the owner picks one
    pub restaurant_type: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub owner_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub agree_to_marketing: bool,
}

impl SignupDraft {
    /// Wire payload for the signup endpoint; the whole draft is sent,
    /// marketing consent included
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            restaurant_name: self.restaurant_name.clone(),
            restaurant_type: self.restaurant_type.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
            phone: self.phone.clone(),
            owner_name: self.owner_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            agree_to_terms: self.agree_to_terms,
            agree_to_marketing: self.agree_to_marketing,
        }
    }
}
