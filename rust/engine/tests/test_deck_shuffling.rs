use std::collections::HashMap;

use seotda_engine::cards::{full_deck, Card, DECK_SIZE};
use seotda_engine::deck::Deck;

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut m = HashMap::new();
    for c in cards {
        *m.entry(*c).or_insert(0) += 1;
    }
    m
}

#[test]
fn deck_reset_deals_the_full_composition() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let dealt: Vec<Card> = (0..DECK_SIZE)
        .map(|i| deck.deal().unwrap_or_else(|| panic!("card {i} missing")))
        .collect();
    assert_eq!(counts(&dealt), counts(&full_deck()));
    assert!(
        deck.deal().is_none(),
        "with nothing discarded the deck cannot refill"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..DECK_SIZE).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..DECK_SIZE).map(|_| d2.deal().unwrap()).collect();
    assert_ne!(a, b, "different seeds should produce different orders");
}

#[test]
fn exhausted_stock_is_rebuilt_from_discards() {
    let mut deck = Deck::new_with_seed(9);
    deck.reset();
    let mut held = Vec::new();
    for _ in 0..DECK_SIZE {
        held.push(deck.deal().unwrap());
    }
    // keep two hands out, return the rest
    let in_hands: Vec<Card> = held.drain(..4).collect();
    deck.discard(held);
    assert_eq!(deck.remaining(), 0);

    let next = deck.deal().expect("recycled deal");
    assert_eq!(deck.info().reshuffles, 1);
    assert_eq!(deck.remaining() + deck.discarded() + in_hands.len() + 1, DECK_SIZE);
    assert!(next.is_valid());
}

#[test]
fn stacked_deck_deals_in_order_and_rejects_foreign_cards() {
    let mut order = full_deck();
    order.rotate_left(5);
    let first = order[0];
    let mut deck = Deck::stacked(order.clone(), 0).unwrap();
    assert_eq!(deck.deal(), Some(first));

    order.pop();
    assert!(Deck::stacked(order, 0).is_none());
}

#[test]
fn deck_info_counts_lights() {
    let deck = Deck::new_with_seed(3);
    let info = deck.info();
    assert_eq!(info.remaining, 20);
    assert_eq!(info.lights_remaining, 3);
    assert_eq!(info.normals_remaining, 17);
    assert_eq!(info.discarded, 0);
}
