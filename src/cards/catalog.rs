//! The card catalog.
//!
//! One process-wide, immutable table indexed by `Card` discriminant.
//! Components read it through `Card::definition()`; nothing copies or
//! mutates it per game.

use super::definition::{Card, CardDefinition, CardValue, Industry, Sector, SpecialEffect};

use CardValue::{Flat, Passive, Special};
use Industry::{Landmark, Major, Primary, Restaurant, Secondary};

const fn def(card: Card, cost: i32, rolls: &'static [u8], value: CardValue, industry: Industry) -> CardDefinition {
    CardDefinition { card, cost, rolls, value, industry }
}

/// Catalog entries in `Card` declaration order.
pub static CATALOG: [CardDefinition; Card::COUNT] = [
    def(Card::WheatField, 1, &[1], Flat(1), Primary(Sector::Wheat)),
    def(Card::AppleOrchard, 3, &[10], Flat(3), Primary(Sector::Wheat)),
    def(Card::Ranch, 1, &[2], Flat(1), Primary(Sector::Cow)),
    def(Card::Forest, 3, &[5], Flat(1), Primary(Sector::Gear)),
    def(Card::Mine, 6, &[9], Flat(5), Primary(Sector::Gear)),
    def(
        Card::FruitAndVegetableMarket,
        2,
        &[11, 12],
        Special(SpecialEffect::FruitAndVegetableMarket),
        Secondary(Sector::Fruit),
    ),
    def(Card::CheeseFactory, 5, &[7], Special(SpecialEffect::CheeseFactory), Secondary(Sector::Factory)),
    def(Card::FurnitureFactory, 3, &[8], Special(SpecialEffect::FurnitureFactory), Secondary(Sector::Factory)),
    def(Card::Bakery, 1, &[2, 3], Flat(1), Secondary(Sector::Bread)),
    def(Card::ConvenienceStore, 2, &[4], Flat(3), Secondary(Sector::Bread)),
    def(Card::Cafe, 2, &[3], Flat(1), Restaurant),
    def(Card::FamilyRestaurant, 3, &[9, 10], Flat(2), Restaurant),
    def(Card::Stadium, 6, &[6], Special(SpecialEffect::Stadium), Major),
    def(Card::TvStation, 7, &[6], Special(SpecialEffect::TvStation), Major),
    def(Card::BusinessCenter, 8, &[6], Special(SpecialEffect::BusinessCenter), Major),
    def(Card::ShoppingMall, 10, &[], Passive, Landmark),
    def(Card::AmusementPark, 16, &[], Passive, Landmark),
    def(Card::RadioTower, 22, &[], Passive, Landmark),
    def(Card::Airport, 30, &[], Passive, Landmark),
    def(Card::TrainStation, 4, &[], Passive, Landmark),
    def(Card::FlowerGarden, 2, &[4], Flat(1), Primary(Sector::Wheat)),
    def(Card::MackerelBoat, 2, &[8], Flat(3), Primary(Sector::Boat)),
    def(Card::TunaBoat, 5, &[12, 13, 14], Special(SpecialEffect::TunaBoat), Primary(Sector::Boat)),
    def(Card::FlowerShop, 1, &[6], Special(SpecialEffect::FlowerShop), Secondary(Sector::Bread)),
    def(Card::FoodWarehouse, 2, &[12, 13], Special(SpecialEffect::FoodWarehouse), Secondary(Sector::Factory)),
    def(Card::SushiBar, 2, &[1], Special(SpecialEffect::SushiBar), Restaurant),
    def(Card::PizzaJoint, 1, &[7], Flat(1), Restaurant),
    def(Card::HamburgerStand, 1, &[8], Flat(1), Restaurant),
    def(Card::Publisher, 5, &[7], Special(SpecialEffect::Publisher), Major),
    def(Card::TaxOffice, 4, &[8, 9], Special(SpecialEffect::TaxOffice), Major),
    def(Card::Harbor, 2, &[], Passive, Landmark),
    def(Card::CornField, 2, &[3, 4], Special(SpecialEffect::CornField), Primary(Sector::Wheat)),
    def(Card::Vineyard, 3, &[7], Flat(3), Primary(Sector::Wheat)),
    def(Card::GeneralStore, 0, &[2], Special(SpecialEffect::GeneralStore), Secondary(Sector::Bread)),
    def(Card::MovingCompany, 2, &[9, 10], Special(SpecialEffect::MovingCompany), Secondary(Sector::Suitcase)),
    def(Card::LoanOffice, -5, &[5, 6], Flat(-2), Secondary(Sector::Suitcase)),
    def(Card::Winery, 3, &[9], Special(SpecialEffect::Winery), Secondary(Sector::Factory)),
    def(
        Card::DemolitionCompany,
        2,
        &[4],
        Special(SpecialEffect::DemolitionCompany),
        Secondary(Sector::Suitcase),
    ),
    def(
        Card::SodaBottlingPlant,
        5,
        &[11],
        Special(SpecialEffect::SodaBottlingPlant),
        Secondary(Sector::Factory),
    ),
    def(Card::FrenchRestaurant, 3, &[5], Special(SpecialEffect::FrenchRestaurant), Restaurant),
    def(Card::MembersOnlyClub, 4, &[12, 13, 14], Special(SpecialEffect::MembersOnlyClub), Restaurant),
    def(Card::Park, 3, &[11, 12, 13], Special(SpecialEffect::Park), Major),
    def(Card::RenovationCompany, 4, &[8], Special(SpecialEffect::RenovationCompany), Major),
    def(Card::TechStartup, 1, &[10], Special(SpecialEffect::TechStartup), Major),
];

/// Landmarks ordered by cost, cheapest first. Ties keep key-set order.
#[must_use]
pub fn landmarks_by_cost() -> [Card; 6] {
    let mut landmarks = Card::LANDMARKS;
    landmarks.sort_by_key(|card| card.definition().cost);
    landmarks
}
