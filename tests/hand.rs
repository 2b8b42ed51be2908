//! Hand ranking and showdown tests.

use pkrs::{
    Card, CardError, Category, HAND_SIZE, Hand, HandError, Ranking, Showdown, Suit, Value, evaluate,
};
use rstest::rstest;

fn hand(text: &str) -> Hand {
    Hand::parse("Player", text).unwrap()
}

#[rstest]
#[case::lowest_high_card("2H 3H 4H 5H 7C", 7, "high card: seven")]
#[case::ace_high_card("2H 3H 4H 5H AS", 14, "high card: ace")]
#[case::pair_of_fours("2H 3H 4H 4D AS", 18, "pair: four")]
#[case::fives_and_jacks("5H 2H JS JD 5S", 44, "two pairs: jack and five")]
#[case::three_queens("QD KH QH AS QS", 67, "three of a kind: queen")]
#[case::seven_to_jack("JS 7H TH 9H 8D", 80, "straight: from seven to jack")]
#[case::all_spades("2S KS TS QS 6S", 96, "flush: spades")]
#[case::nines_over_queens("9S QH 9D QC 9C", 106, "full house: nine over queen")]
#[case::kings_over_twos("2S 2H KD KC KS", 110, "full house: king over two")]
#[case::four_aces("AS AH 7D AC AD", 125, "four of a kind: ace")]
#[case::four_threes("3C 3D 3H 3S KD", 114, "four of a kind: three")]
#[case::five_to_nine("8H 6H 7H 9H 5H", 134, "straight flush: hearts, from five to nine")]
#[case::ten_to_ace("TS JS QS KS AS", 139, "straight flush: spades, from ten to ace")]
fn rank_and_reason(#[case] text: &str, #[case] rank: u8, #[case] reason: &str) {
    let hand = hand(text);
    assert_eq!(hand.rank(), rank);
    assert_eq!(hand.reason(), reason);
}

#[test]
fn ace_is_never_low() {
    let wheel = hand("AH 2D 3C 4S 5H");
    assert_eq!(wheel.ranking(), Ranking::HighCard(Value::Ace));
    assert_eq!(wheel.rank(), 14);

    let suited_wheel = hand("AS 2S 3S 4S 5S");
    assert_eq!(suited_wheel.category(), Category::Flush);
    assert_eq!(suited_wheel.rank(), 97);
}

#[test]
fn full_house_resolves_pair_and_triple() {
    // Pair sorts below the triple.
    assert_eq!(
        hand("4C 4D 9H 9S 9C").ranking(),
        Ranking::FullHouse {
            triple: Value::Nine,
            pair: Value::Four,
        }
    );
    // Triple sorts below the pair.
    assert_eq!(
        hand("4C 4D 4H 9S 9C").ranking(),
        Ranking::FullHouse {
            triple: Value::Four,
            pair: Value::Nine,
        }
    );
}

#[test]
fn two_pairs_names_higher_pair_first() {
    let hand = hand("KD 3C KS 3H 7D");
    assert_eq!(
        hand.ranking(),
        Ranking::TwoPairs {
            first: Value::Three,
            second: Value::King,
        }
    );
    assert_eq!(hand.reason(), "two pairs: king and three");
    assert_eq!(hand.rank(), 28 + 13 + 3);
}

#[test]
fn duplicate_cards_are_accepted() {
    let hand = hand("AS AS AS AS AS");
    assert_eq!(hand.ranking(), Ranking::FourOfAKind(Value::Ace));
}

#[test]
fn cards_are_sorted_by_rank() {
    let hand = hand("KD 2C AH 9S 5H");
    let ranks: Vec<u8> = hand.cards().iter().map(Card::rank).collect();
    assert_eq!(ranks, vec![2, 5, 9, 13, 14]);
    assert_eq!(hand.owner(), "Player");
}

#[test]
fn extra_whitespace_is_ignored() {
    assert_eq!(hand("  2H  3H 4H 4D AS ").reason(), "pair: four");
}

#[test]
fn from_str_has_no_owner() {
    let hand: Hand = "2H 3H 4H 4D AS".parse().unwrap();
    assert_eq!(hand.owner(), "");
    assert_eq!(hand.rank(), 18);
}

#[rstest]
#[case::empty("", HandError::MalformedHand(0))]
#[case::four_cards("2H 3H 4H 5H", HandError::MalformedHand(4))]
#[case::six_cards("2H 3H 4H 5H 7C 8C", HandError::MalformedHand(6))]
#[case::unknown_value(
    "2H 3H 1H 5H 7C",
    HandError::InvalidToken { index: 2, source: CardError::UnknownValue('1') }
)]
#[case::unknown_suit(
    "2H 3H 4H 5H 7X",
    HandError::InvalidToken { index: 4, source: CardError::UnknownSuit('X') }
)]
#[case::long_token(
    "2H 10H 4H 5H 7C",
    HandError::InvalidToken { index: 1, source: CardError::InvalidLength(3) }
)]
fn malformed_hands(#[case] text: &str, #[case] expected: HandError) {
    assert_eq!(Hand::parse("Player", text).unwrap_err(), expected);
}

#[test]
fn error_source_is_card_error() {
    use core::error::Error;

    let err = Hand::parse("Player", "2H 3H 4H 5H 7X").unwrap_err();
    assert_eq!(err.to_string(), "invalid card at position 4");
    assert_eq!(
        err.source().map(|source| source.to_string()),
        Some("unknown card suit `X`".to_string())
    );
}

#[test]
fn ranking_is_memoized() {
    let hand = hand("9S QH 9D QC 9C");
    let first = hand.ranking();
    assert_eq!(hand.ranking(), first);

    let cloned = hand.clone();
    assert_eq!(cloned.ranking(), first);
    assert_eq!(cloned.reason(), hand.reason());
}

#[test]
fn ranking_is_shared_across_threads() {
    let hand = &hand("8H 6H 7H 9H 5H");

    let rankings: Vec<Ranking> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8).map(|_| scope.spawn(move || hand.ranking())).collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });

    assert!(rankings.iter().all(|ranking| *ranking == rankings[0]));
    assert_eq!(rankings[0], hand.ranking());
    assert_eq!(hand.rank(), 134);
}

fn cards(tokens: [&str; HAND_SIZE]) -> [Card; HAND_SIZE] {
    tokens.map(|token| Card::parse(token).unwrap())
}

#[rstest]
#[case::straight_flush(["9H", "5H", "7H", "6H", "8H"])]
#[case::straight(["JS", "7H", "TH", "9H", "8D"])]
#[case::high_card(["AS", "2H", "3H", "4H", "5H"])]
#[case::two_pairs(["5H", "2H", "JS", "JD", "5S"])]
#[case::full_house(["9S", "QH", "9D", "QC", "9C"])]
fn evaluate_ignores_card_order(#[case] tokens: [&str; HAND_SIZE]) {
    let shuffled = cards(tokens);
    let expected = Hand::from_cards("Player", shuffled).ranking();

    assert_eq!(evaluate(shuffled), expected);

    let mut reversed = shuffled;
    reversed.reverse();
    assert_eq!(evaluate(reversed), expected);
}

#[test]
fn evaluate_unsorted_straight_flush() {
    let ranking = evaluate(cards(["9H", "5H", "7H", "6H", "8H"]));
    assert_eq!(ranking.rank(), 134);
    assert_eq!(
        ranking.to_string(),
        "straight flush: hearts, from five to nine"
    );
}

/// Weakest and strongest hand of each category, weakest category first.
const BOUNDS: [(Category, &str, &str); 9] = [
    (Category::HighCard, "2C 3D 4H 5S 7C", "9C JD QH KS AC"),
    (Category::Pair, "2C 2D 3H 4S 5C", "AC AD QH KS JC"),
    (Category::TwoPairs, "2C 2D 3H 3S 4C", "KC KD AH AS QC"),
    (Category::ThreeOfAKind, "2C 2D 2H 3S 4C", "AC AD AH KS QC"),
    (Category::Straight, "2C 3D 4H 5S 6C", "TC JD QH KS AC"),
    (Category::Flush, "2C 3C 4C 5C 7C", "9H JH QH KH AH"),
    (Category::FullHouse, "2C 2D 2H 3S 3C", "AC AD AH KS KC"),
    (Category::FourOfAKind, "2C 2D 2H 2S 3C", "AC AD AH AS KC"),
    (Category::StraightFlush, "2C 3C 4C 5C 6C", "TS JS QS KS AS"),
];

#[test]
fn category_bands_do_not_overlap() {
    for (category, weakest, strongest) in BOUNDS {
        assert_eq!(hand(weakest).category(), category, "{weakest}");
        assert_eq!(hand(strongest).category(), category, "{strongest}");
        assert!(hand(weakest).rank() > category.bonus());
    }

    for pair in BOUNDS.windows(2) {
        let (_, _, strongest) = pair[0];
        let (_, weakest, _) = pair[1];
        assert!(
            hand(strongest).rank() < hand(weakest).rank(),
            "{strongest} should rank below {weakest}"
        );
    }

    assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
    assert!(Category::ALL.windows(2).all(|w| w[0].bonus() < w[1].bonus()));
}

#[test]
fn compare_high_card() {
    let bob = Hand::parse("Bob", "2C 3H 4S 8C AH").unwrap();
    let john = Hand::parse("John", "2H 3D 5S 9C KD").unwrap();

    let showdown = bob.compare(&john);
    assert_eq!(showdown.to_string(), "Bob wins with high card: ace");
    assert_eq!(showdown.winner(), Some("Bob"));
    assert_eq!(
        john.compare(&bob).to_string(),
        "Bob wins with high card: ace"
    );
}

#[test]
fn compare_tie() {
    let bob = Hand::parse("Bob", "2H 3D 5S 9C KD").unwrap();
    let john = Hand::parse("John", "2D 3H 5C 9S KH").unwrap();

    let showdown = bob.compare(&john);
    assert_eq!(showdown, Showdown::Tie);
    assert_eq!(showdown.to_string(), "Tie");
    assert!(showdown.is_tie());
    assert_eq!(showdown.winner(), None);
}

#[test]
fn flushes_with_same_high_card_tie() {
    let black = Hand::parse("Black", "2S 4S 6S 8S KS").unwrap();
    let white = Hand::parse("White", "3H 5H 7H 9H KH").unwrap();
    assert!(black.compare(&white).is_tie());
}

#[test]
fn compare_across_categories() {
    let black = Hand::parse("Black", "AS AH 7D AC AD").unwrap();
    let white = Hand::parse("White", "8H 6H 7H 9H 5H").unwrap();

    assert_eq!(
        black.compare(&white).to_string(),
        "White wins with straight flush: hearts, from five to nine"
    );
    assert_eq!(
        white.compare(&black),
        Showdown::Win {
            owner: "White",
            ranking: Ranking::StraightFlush {
                suit: Suit::Hearts,
                low: Value::Five,
                high: Value::Nine,
            },
        }
    );
}
