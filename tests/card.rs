//! Card model integration tests.

use cribbage::{Card, CardError, DECK_SIZE, Suit};

fn card(code: &str) -> Card {
    code.parse().unwrap()
}

#[test]
fn construct_validates_rank_and_suit() {
    let card = Card::from_parts(12, 2).unwrap();
    assert_eq!(card.rank(), 12);
    assert_eq!(card.suit(), Suit::Hearts);

    assert_eq!(Card::from_parts(0, 0).unwrap_err(), CardError::InvalidRank(0));
    assert_eq!(
        Card::from_parts(14, 0).unwrap_err(),
        CardError::InvalidRank(14)
    );
    assert_eq!(Card::from_parts(1, 4).unwrap_err(), CardError::InvalidSuit(4));
    assert_eq!(
        Card::new(0, Suit::Clubs).unwrap_err(),
        CardError::InvalidRank(0)
    );
    assert!(Card::new(13, Suit::Spades).is_ok());
}

#[test]
fn parse_short_codes() {
    assert_eq!(card("AS"), Card::new(1, Suit::Spades).unwrap());
    assert_eq!(card("TD"), Card::new(10, Suit::Diamonds).unwrap());
    assert_eq!(card("KH"), Card::new(13, Suit::Hearts).unwrap());
    assert_eq!(card("7C"), Card::new(7, Suit::Clubs).unwrap());
    assert_eq!(card("JH"), Card::new(11, Suit::Hearts).unwrap());
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Card>().unwrap_err(), CardError::InvalidLength);
    assert_eq!("A".parse::<Card>().unwrap_err(), CardError::InvalidLength);
    assert_eq!("ASX".parse::<Card>().unwrap_err(), CardError::InvalidLength);
    assert_eq!("10H".parse::<Card>().unwrap_err(), CardError::InvalidLength);
    assert_eq!(" KS ".parse::<Card>().unwrap_err(), CardError::InvalidLength);
    assert_eq!(
        " K".parse::<Card>().unwrap_err(),
        CardError::InvalidRankChar(' ')
    );
    assert_eq!(
        "ks".parse::<Card>().unwrap_err(),
        CardError::InvalidRankChar('k')
    );
    assert_eq!(
        "Ks".parse::<Card>().unwrap_err(),
        CardError::InvalidSuitChar('s')
    );
    assert_eq!(
        "10".parse::<Card>().unwrap_err(),
        CardError::InvalidRankChar('1')
    );
    assert_eq!(
        "1S".parse::<Card>().unwrap_err(),
        CardError::InvalidRankChar('1')
    );
    assert_eq!(
        "ZS".parse::<Card>().unwrap_err(),
        CardError::InvalidRankChar('Z')
    );
    assert_eq!(
        "AX".parse::<Card>().unwrap_err(),
        CardError::InvalidSuitChar('X')
    );
}

#[test]
fn value_orders_by_rank_then_suit() {
    assert_eq!(card("AC").value(), 0);
    assert_eq!(card("AS").value(), 3);
    assert_eq!(card("2C").value(), 4);
    assert_eq!(card("KS").value(), 51);

    assert!(card("AC") < card("AD"));
    assert!(card("AS") < card("2C"));
    assert!(card("QS") < card("KC"));

    let mut hand = [card("KC"), card("2H"), card("2C"), card("AS")];
    hand.sort();
    assert_eq!(hand, [card("AS"), card("2C"), card("2H"), card("KC")]);
}

#[test]
fn from_value_covers_the_deck() {
    for value in 0..DECK_SIZE as u8 {
        let card = Card::from_value(value).unwrap();
        assert_eq!(card.value(), value);
        assert_eq!(card.code().to_string().parse::<Card>().unwrap(), card);
    }
    assert_eq!(
        Card::from_value(52).unwrap_err(),
        CardError::InvalidValue(52)
    );
}

#[test]
fn rank_views() {
    for (code, rank, fifteens) in [
        ("AC", 1, 1),
        ("9D", 9, 9),
        ("TH", 10, 10),
        ("JS", 11, 10),
        ("QC", 12, 10),
        ("KD", 13, 10),
    ] {
        let card = card(code);
        assert_eq!(card.rank(), rank, "{code}");
        assert_eq!(card.fifteens_rank(), fifteens, "{code}");
    }
    assert!(card("JC").is_jack());
    assert!(!card("QC").is_jack());
}

#[test]
fn text_forms() {
    assert_eq!(card("AS").to_string(), "Ace of Spades");
    assert_eq!(card("TD").to_string(), "Ten of Diamonds");
    assert_eq!(card("AS").short().to_string(), "A♠");
    assert_eq!(card("TD").short().to_string(), "10♦");
    assert_eq!(card("KH").short().to_string(), "K♥");
    assert_eq!(card("3C").short().to_string(), "3♣");
    assert_eq!(card("TD").code().to_string(), "TD");
    assert_eq!(card("QH").rank_name(), "Queen");
}

#[test]
fn suit_lookups() {
    for (index, suit) in Suit::ALL.into_iter().enumerate() {
        assert_eq!(suit.index() as usize, index);
        assert_eq!(Suit::from_index(index as u8).unwrap(), suit);
        assert_eq!(Suit::from_char(suit.letter()).unwrap(), suit);
    }
    assert_eq!(Suit::from_index(4).unwrap_err(), CardError::InvalidSuit(4));
    assert_eq!(
        Suit::from_char('h').unwrap_err(),
        CardError::InvalidSuitChar('h')
    );
    assert!(Suit::Hearts.is_red());
    assert!(!Suit::Spades.is_red());
    assert_eq!(Suit::Diamonds.to_string(), "Diamonds");
}
