//! Card definitions - static card data.
//!
//! `Card` names every card in the game. `CardDefinition` holds the
//! immutable properties of a card: cost, activation rolls, value and
//! industry. How many copies a player holds and whether they are open
//! is tracked separately in `Player`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Every card in the game.
///
/// Declaration order is significant: it is the catalog order, the
/// iteration order of a player's establishments, and the order in which
/// cards of the same phase resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Card {
    WheatField,
    AppleOrchard,
    Ranch,
    Forest,
    Mine,
    FruitAndVegetableMarket,
    CheeseFactory,
    FurnitureFactory,
    Bakery,
    ConvenienceStore,
    Cafe,
    FamilyRestaurant,
    Stadium,
    TvStation,
    BusinessCenter,
    ShoppingMall,
    AmusementPark,
    RadioTower,
    Airport,
    TrainStation,
    FlowerGarden,
    MackerelBoat,
    TunaBoat,
    FlowerShop,
    FoodWarehouse,
    SushiBar,
    PizzaJoint,
    HamburgerStand,
    Publisher,
    TaxOffice,
    Harbor,
    CornField,
    Vineyard,
    GeneralStore,
    MovingCompany,
    LoanOffice,
    Winery,
    DemolitionCompany,
    SodaBottlingPlant,
    FrenchRestaurant,
    MembersOnlyClub,
    Park,
    RenovationCompany,
    TechStartup,
}

impl Card {
    /// Number of distinct cards.
    pub const COUNT: usize = 44;

    /// All cards in catalog order.
    pub const ALL: [Card; Card::COUNT] = [
        Card::WheatField,
        Card::AppleOrchard,
        Card::Ranch,
        Card::Forest,
        Card::Mine,
        Card::FruitAndVegetableMarket,
        Card::CheeseFactory,
        Card::FurnitureFactory,
        Card::Bakery,
        Card::ConvenienceStore,
        Card::Cafe,
        Card::FamilyRestaurant,
        Card::Stadium,
        Card::TvStation,
        Card::BusinessCenter,
        Card::ShoppingMall,
        Card::AmusementPark,
        Card::RadioTower,
        Card::Airport,
        Card::TrainStation,
        Card::FlowerGarden,
        Card::MackerelBoat,
        Card::TunaBoat,
        Card::FlowerShop,
        Card::FoodWarehouse,
        Card::SushiBar,
        Card::PizzaJoint,
        Card::HamburgerStand,
        Card::Publisher,
        Card::TaxOffice,
        Card::Harbor,
        Card::CornField,
        Card::Vineyard,
        Card::GeneralStore,
        Card::MovingCompany,
        Card::LoanOffice,
        Card::Winery,
        Card::DemolitionCompany,
        Card::SodaBottlingPlant,
        Card::FrenchRestaurant,
        Card::MembersOnlyClub,
        Card::Park,
        Card::RenovationCompany,
        Card::TechStartup,
    ];

    /// The canonical landmark key set. Owning all of them wins the game.
    pub const LANDMARKS: [Card; 6] = [
        Card::TrainStation,
        Card::ShoppingMall,
        Card::AmusementPark,
        Card::RadioTower,
        Card::Harbor,
        Card::Airport,
    ];

    /// The canonical major-establishment key set, in resolution order.
    pub const MAJOR_ESTABLISHMENTS: [Card; 8] = [
        Card::Stadium,
        Card::TvStation,
        Card::BusinessCenter,
        Card::Publisher,
        Card::TaxOffice,
        Card::Park,
        Card::RenovationCompany,
        Card::TechStartup,
    ];

    /// Snake-case name, as used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::WheatField => "wheat_field",
            Card::AppleOrchard => "apple_orchard",
            Card::Ranch => "ranch",
            Card::Forest => "forest",
            Card::Mine => "mine",
            Card::FruitAndVegetableMarket => "fruit_and_vegetable_market",
            Card::CheeseFactory => "cheese_factory",
            Card::FurnitureFactory => "furniture_factory",
            Card::Bakery => "bakery",
            Card::ConvenienceStore => "convenience_store",
            Card::Cafe => "cafe",
            Card::FamilyRestaurant => "family_restaurant",
            Card::Stadium => "stadium",
            Card::TvStation => "tv_station",
            Card::BusinessCenter => "business_center",
            Card::ShoppingMall => "shopping_mall",
            Card::AmusementPark => "amusement_park",
            Card::RadioTower => "radio_tower",
            Card::Airport => "airport",
            Card::TrainStation => "train_station",
            Card::FlowerGarden => "flower_garden",
            Card::MackerelBoat => "mackerel_boat",
            Card::TunaBoat => "tuna_boat",
            Card::FlowerShop => "flower_shop",
            Card::FoodWarehouse => "food_warehouse",
            Card::SushiBar => "sushi_bar",
            Card::PizzaJoint => "pizza_joint",
            Card::HamburgerStand => "hamburger_stand",
            Card::Publisher => "publisher",
            Card::TaxOffice => "tax_office",
            Card::Harbor => "harbor",
            Card::CornField => "corn_field",
            Card::Vineyard => "vineyard",
            Card::GeneralStore => "general_store",
            Card::MovingCompany => "moving_company",
            Card::LoanOffice => "loan_office",
            Card::Winery => "winery",
            Card::DemolitionCompany => "demolition_company",
            Card::SodaBottlingPlant => "soda_bottling_plant",
            Card::FrenchRestaurant => "french_restaurant",
            Card::MembersOnlyClub => "members_only_club",
            Card::Park => "park",
            Card::RenovationCompany => "renovation_company",
            Card::TechStartup => "tech_startup",
        }
    }

    /// Position in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Static definition of this card.
    #[must_use]
    pub fn definition(self) -> &'static CardDefinition {
        &super::catalog::CATALOG[self.index()]
    }

    /// Landmark cards count towards victory.
    #[must_use]
    pub fn is_landmark(self) -> bool {
        self.definition().industry == Industry::Landmark
    }

    /// Major establishments: unique per player, acting player only.
    #[must_use]
    pub fn is_major(self) -> bool {
        self.definition().industry == Industry::Major
    }

    /// Regular establishments can be held in multiple copies and renovated.
    #[must_use]
    pub fn is_establishment(self) -> bool {
        !self.is_unique()
    }

    /// Landmarks and majors can be owned at most once per player.
    #[must_use]
    pub fn is_unique(self) -> bool {
        self.is_landmark() || self.is_major()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::ALL
            .iter()
            .copied()
            .find(|card| card.name() == s)
            .ok_or_else(|| GameError::UnknownCard(s.to_string()))
    }
}

/// Production-chain tag used by several effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Wheat,
    Cow,
    Gear,
    Boat,
    Bread,
    Factory,
    Fruit,
    Suitcase,
}

/// Industry classification of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    /// Pays its owner on anyone's roll.
    Primary(Sector),
    /// Pays its owner on the owner's own roll.
    Secondary(Sector),
    /// Takes coins from the player whose turn it is.
    Restaurant,
    /// Unique special-effect card, acting player only.
    Major,
    /// Unique victory building.
    Landmark,
}

/// Effects that need more than a flat payout.
///
/// Every card with `CardValue::Special` names one of these, and the
/// resolver matches on them exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffect {
    FruitAndVegetableMarket,
    CheeseFactory,
    FurnitureFactory,
    Stadium,
    TvStation,
    BusinessCenter,
    TunaBoat,
    FlowerShop,
    FoodWarehouse,
    SushiBar,
    Publisher,
    TaxOffice,
    CornField,
    GeneralStore,
    MovingCompany,
    Winery,
    DemolitionCompany,
    SodaBottlingPlant,
    FrenchRestaurant,
    MembersOnlyClub,
    Park,
    RenovationCompany,
    TechStartup,
}

/// What a card yields when it activates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardValue {
    /// Fixed amount per working unit.
    Flat(i32),
    /// Resolved by a dedicated handler.
    Special(SpecialEffect),
    /// Never activates (landmarks).
    Passive,
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    pub card: Card,

    /// Purchase price. Negative for cards that pay out when bought.
    pub cost: i32,

    /// Roll totals that trigger the card.
    pub rolls: &'static [u8],

    pub value: CardValue,

    pub industry: Industry,
}

impl CardDefinition {
    /// Does this card trigger on the given roll total?
    #[must_use]
    pub fn activates_on(&self, roll: u8) -> bool {
        self.rolls.contains(&roll)
    }

    /// Sector of a primary or secondary industry card.
    #[must_use]
    pub fn sector(&self) -> Option<Sector> {
        match self.industry {
            Industry::Primary(sector) | Industry::Secondary(sector) => Some(sector),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_primary(&self) -> bool {
        matches!(self.industry, Industry::Primary(_))
    }

    #[must_use]
    pub fn is_secondary(&self) -> bool {
        matches!(self.industry, Industry::Secondary(_))
    }

    #[must_use]
    pub fn is_restaurant(&self) -> bool {
        self.industry == Industry::Restaurant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_name_round_trip() {
        for card in Card::ALL {
            assert_eq!(card.name().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn test_unknown_card_name() {
        let err = "city_hall".parse::<Card>().unwrap_err();
        assert_eq!(err, GameError::UnknownCard("city_hall".to_string()));
    }

    #[test]
    fn test_card_classification() {
        assert!(Card::Harbor.is_landmark());
        assert!(Card::Harbor.is_unique());
        assert!(Card::Park.is_major());
        assert!(!Card::Park.is_establishment());
        assert!(Card::Bakery.is_establishment());
        assert!(!Card::Bakery.is_unique());
    }

    #[test]
    fn test_canonical_key_sets() {
        assert!(Card::LANDMARKS.iter().all(|c| c.is_landmark()));
        assert!(Card::MAJOR_ESTABLISHMENTS.iter().all(|c| c.is_major()));

        let landmarks = Card::ALL.iter().filter(|c| c.is_landmark()).count();
        let majors = Card::ALL.iter().filter(|c| c.is_major()).count();
        assert_eq!(landmarks, Card::LANDMARKS.len());
        assert_eq!(majors, Card::MAJOR_ESTABLISHMENTS.len());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Card::FruitAndVegetableMarket).unwrap();
        assert_eq!(json, "\"fruit_and_vegetable_market\"");

        let card: Card = serde_json::from_str("\"tv_station\"").unwrap();
        assert_eq!(card, Card::TvStation);
    }

    #[test]
    fn test_definition_sector() {
        assert_eq!(Card::Bakery.definition().sector(), Some(Sector::Bread));
        assert_eq!(Card::Mine.definition().sector(), Some(Sector::Gear));
        assert_eq!(Card::Cafe.definition().sector(), None);
        assert!(Card::Cafe.definition().is_restaurant());
    }
}
