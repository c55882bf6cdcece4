use seotda_engine::cards::{full_deck, Card, CardKind};
use seotda_engine::hand::{compare_hands, evaluate, Category, HandError};

fn l(m: u8) -> Card {
    Card {
        month: m,
        kind: CardKind::Light,
    }
}

fn n(m: u8) -> Card {
    Card {
        month: m,
        kind: CardKind::Normal,
    }
}

fn score(a: Card, b: Card) -> u16 {
    evaluate(&[a, b]).unwrap().score
}

#[test]
fn reference_hands() {
    assert_eq!(score(l(3), l(8)), 1000);
    assert_eq!(score(n(5), n(5)), 905);
    assert_eq!(score(n(1), n(4)), 898);
    assert_eq!(score(n(2), n(7)), 9);
}

#[test]
fn every_deck_pair_has_exactly_one_rank() {
    let deck = full_deck();
    for i in 0..deck.len() {
        for j in (i + 1)..deck.len() {
            let r = evaluate(&[deck[i], deck[j]])
                .unwrap_or_else(|e| panic!("{} {} unranked: {e}", deck[i], deck[j]));
            let expected = match r.score {
                998..=1000 => Category::Gwang,
                901..=910 => Category::Pair,
                894..=899 => Category::Special,
                0..=9 => Category::Kkeut,
                other => panic!("score {other} outside every category"),
            };
            assert_eq!(r.category, expected, "{} {}", deck[i], deck[j]);
        }
    }
}

#[test]
fn category_ordering_is_strict() {
    let gwang = evaluate(&[l(1), l(8)]).unwrap();
    let pair = evaluate(&[n(10), n(10)]).unwrap();
    let special = evaluate(&[n(1), n(2)]).unwrap();
    let kkeut = evaluate(&[n(4), n(5)]).unwrap();
    assert!(compare_hands(&gwang, &pair).is_gt());
    assert!(compare_hands(&pair, &special).is_gt());
    assert!(compare_hands(&special, &kkeut).is_gt());
}

#[test]
fn pair_beats_special_on_shared_months() {
    // 1+1 is a pair even though month 1 anchors most specials
    assert!(score(l(1), n(1)) > score(n(1), n(2)));
}

#[test]
fn zero_kkeut_is_the_floor() {
    let r = evaluate(&[n(2), n(8)]).unwrap();
    assert_eq!(r.score, 0);
    assert_eq!(r.label, "0-kkeut");
}

#[test]
fn malformed_cards_never_score() {
    assert_eq!(
        evaluate(&[l(5), n(2)]),
        Err(HandError::InvalidCard(l(5)))
    );
    assert_eq!(
        evaluate(&[n(11), n(2)]),
        Err(HandError::InvalidCard(n(11)))
    );
    assert_eq!(
        evaluate(&[n(1), n(2), n(3)]),
        Err(HandError::TooManyCards { cards: 3 })
    );
    assert_eq!(evaluate(&[]), Err(HandError::Incomplete { cards: 0 }));
}
