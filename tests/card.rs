//! Card and deck tests.

use std::collections::HashMap;

use spiders::deck::{play_deck, shuffled_play_deck, single_deck, suit_run};
use spiders::{
    Card, Color, DECK_SIZE, PLAY_DECK_SIZE, ParseError, Rank, RunOrder, Suit,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn equality_by_value_and_identity() {
    let ace_hearts = Card::new(Suit::Hearts, Rank::Ace);
    let ace_clubs = Card::new(Suit::Clubs, Rank::Ace);
    let other_ace_hearts = Card::new(Suit::Hearts, Rank::Ace);

    assert!(ace_hearts.same_value(&ace_clubs));
    assert!(!ace_hearts.strict_eq(&ace_clubs));
    assert!(ace_hearts.strict_eq(&other_ace_hearts));
    assert_eq!(ace_hearts, other_ace_hearts);
    assert_ne!(ace_hearts, ace_clubs);

    let deck = single_deck();
    for a in &deck {
        for b in &deck {
            assert_eq!(a.strict_eq(b), a == b);
        }
    }
}

#[test]
fn value_ordering_ignores_suit() {
    use std::cmp::Ordering;

    assert_eq!(card("K♠").cmp_value(&card("Q♥")), Ordering::Greater);
    assert_eq!(card("2♦").cmp_value(&card("10♦")), Ordering::Less);
    assert_eq!(card("7♣").cmp_value(&card("7♥")), Ordering::Equal);
}

#[test]
fn text_form_round_trips() {
    for token in ["A♥", "10♦", "J♣", "Q♠", "K♦", "7♥"] {
        assert_eq!(card(token).to_string(), token);
    }
    assert_eq!(card("A❤"), Card::new(Suit::Hearts, Rank::Ace));
    assert_eq!(card("q♠"), Card::new(Suit::Spades, Rank::Queen));
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Card>().unwrap_err(), ParseError::Empty);
    assert_eq!(
        "10x".parse::<Card>().unwrap_err(),
        ParseError::UnknownSuit("x".to_string())
    );
    assert_eq!(
        "1♦".parse::<Card>().unwrap_err(),
        ParseError::UnknownRank("1".to_string())
    );
    assert_eq!(
        "♦".parse::<Card>().unwrap_err(),
        ParseError::UnknownRank(String::new())
    );
    assert_eq!(
        Card::from_rank_value(Suit::Hearts, 0).unwrap_err(),
        ParseError::RankOutOfRange(0)
    );
    assert_eq!(
        Card::from_rank_value(Suit::Hearts, 14).unwrap_err(),
        ParseError::RankOutOfRange(14)
    );
}

#[test]
fn command_codes_parse_through_suit_symbols() {
    for (head, code, expected) in [("10", 'd', "10♦"), ("q", 'S', "Q♠"), ("A", 'h', "A♥")] {
        let symbol = Suit::from_code(code).unwrap().symbol();
        assert_eq!(format!("{head}{symbol}").parse::<Card>().unwrap(), card(expected));
    }
    assert_eq!(
        format!("x{}", Suit::Clubs.symbol()).parse::<Card>().unwrap_err(),
        ParseError::UnknownRank("x".to_string())
    );
}

#[test]
fn suit_codes_and_colors() {
    for suit in Suit::ALL {
        assert_eq!(Suit::from_code(suit.code()).unwrap(), suit);
        assert_eq!(Suit::from_symbol(suit.symbol()).unwrap(), suit);
    }
    assert_eq!(Suit::from_code('H').unwrap(), Suit::Hearts);
    assert!(Suit::from_code('x').is_err());
    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Clubs.color(), Color::Black);
}

#[test]
fn stacking_requires_next_rank_and_same_suit_or_other_color() {
    for value in 2..=13 {
        for suit in Suit::ALL {
            let base = Card::from_rank_value(suit, value).unwrap();
            let stackable = Suit::ALL
                .into_iter()
                .filter(|&other| {
                    Card::from_rank_value(other, value - 1)
                        .unwrap()
                        .can_stack_on(&base)
                })
                .count();
            assert_eq!(stackable, 3, "stacking on {base}");
        }
    }

    assert!(card("2♥").can_stack_on(&card("3♣")));
    assert!(card("2♥").can_stack_on(&card("3♥")));
    assert!(!card("2♦").can_stack_on(&card("3♥")));
    assert!(!card("3♥").can_stack_on(&card("3♥")));
    assert!(!card("4♠").can_stack_on(&card("3♥")));
    assert!(!card("K♠").can_stack_on(&card("A♥")));
}

#[test]
fn suit_runs() {
    let up = suit_run(Suit::Clubs, RunOrder::Ascending);
    let down = suit_run(Suit::Clubs, RunOrder::Descending);

    assert_eq!(up.len(), 13);
    assert_eq!(up.first(), Some(&card("A♣")));
    assert_eq!(up.last(), Some(&card("K♣")));
    assert_eq!(down.first(), Some(&card("K♣")));
    assert_eq!(down.last(), Some(&card("A♣")));
    assert!(down.windows(2).all(|pair| pair[1].can_stack_on(&pair[0])));
}

#[test]
fn decks_have_expected_contents() {
    let deck = single_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck[0], card("A♥"));
    assert_eq!(deck[13], card("A♠"));
    assert_eq!(deck[26], card("A♣"));
    assert_eq!(deck[51], card("K♦"));

    let play = play_deck();
    assert_eq!(play.len(), PLAY_DECK_SIZE);
    assert_eq!(&play[..DECK_SIZE], &play[DECK_SIZE..]);

    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in play {
        *counts.entry(card).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 2));
}

#[test]
fn shuffle_uses_the_given_rng() {
    let first = shuffled_play_deck(&mut ChaCha8Rng::seed_from_u64(3));
    let second = shuffled_play_deck(&mut ChaCha8Rng::seed_from_u64(3));
    let other = shuffled_play_deck(&mut ChaCha8Rng::seed_from_u64(4));

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_ne!(first, play_deck());

    let mut sorted = first;
    sorted.sort_by_key(|card| (card.suit as u8, card.value()));
    let mut expected = play_deck();
    expected.sort_by_key(|card| (card.suit as u8, card.value()));
    assert_eq!(sorted, expected);
}
