use assert_matches::assert_matches;

use crate::random::Scripted;

use super::*;

fn fixture() -> LoggingDeck<char, Scripted> {
    Deck::new("abcde".chars(), Scripted::default()).into()
}

#[test]
fn test_records_mutations() {
    let mut deck = fixture();
    assert!(deck.log().is_empty());

    deck.draw_n(2);
    deck.shuffle().discard_to_top('x');
    deck.draw_n_where(|&c| c == 'z', 3);
    deck.shuffle_all_to_bottom(vec!['y', 'z']);
    deck.set_cards(vec![]);
    deck.draw();

    let events: Vec<_> = deck.log().events().cloned().collect();
    assert_eq!(
        events,
        vec![
            Event::Draw {
                from: Position::Top,
                count: 2
            },
            Event::Shuffle,
            Event::Insert {
                to: Position::Top,
                count: 1,
                shuffled: false
            },
            Event::Draw {
                from: Position::Matching,
                count: 0
            },
            Event::Insert {
                to: Position::Bottom,
                count: 2,
                shuffled: true
            },
            Event::Replace { count: 0 },
            Event::Draw {
                from: Position::Top,
                count: 0
            },
        ]
    );
    let ids: Vec<_> = deck.log().entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, (0..7).collect::<Vec<_>>());
}

#[test]
fn test_inspection_is_not_logged() {
    let mut deck = fixture();
    assert_eq!(deck.top(), Some(&'a'));
    assert_eq!(deck.bottom_n(2), vec![&'e', &'d']);
    assert_eq!(deck.random(), Some(&'a'));
    assert_eq!(deck.random_n(2).len(), 2);
    assert_eq!(deck.remaining(), 5);
    assert!(deck.log().is_empty());
}

#[test]
fn test_behaves_like_deck() {
    let mut deck = fixture();
    assert_eq!(deck.draw_from_bottom(), Some('e'));
    assert_eq!(deck.draw_random(), Some('a'));
    deck.discard_all_random(vec!['x']);
    deck.discard_all_to_top(vec!['y', 'z']);
    assert_eq!(deck.iter().copied().collect::<String>(), "yzxbcd");
    assert_eq!(deck.deck().top_n(2), vec![&'y', &'z']);
    assert_eq!(deck.into_inner().remaining(), 6);
}

#[test]
fn test_failed_draw_is_not_logged() {
    let mut deck = fixture();
    let result = deck.try_draw_n_where(|_| Err(()), 1);
    assert_matches!(result, Err(()));
    assert!(deck.log().is_empty());

    let result = deck.try_draw_n_where(|&c| Ok::<_, ()>(c < 'c'), 5);
    assert_matches!(result, Ok(drawn) if drawn == vec!['a', 'b']);
    assert_matches!(
        deck.log().last(),
        Some(Entry {
            id: 0,
            event: Event::Draw {
                from: Position::Matching,
                count: 2
            }
        })
    );
}

#[test]
fn test_raw_log() {
    let mut deck: LoggingDeck<char, Scripted> =
        Deck::new("ab".chars(), Scripted::default()).into();
    deck.draw();
    deck.discard_random('c');

    let json = serde_json::to_string(&RawLog::from(&deck)).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"initial":{"cards":["a","b"]},"entries":["#,
            r#"{"id":0,"event":"draw","from":"top","count":1},"#,
            r#"{"id":1,"event":"insert","to":"random","count":1,"shuffled":false}]}"#,
        )
    );
    let raw: RawLog<char> = serde_json::from_str(&json).unwrap();
    assert_eq!(raw, RawLog::from(deck));
}

#[test]
fn test_load_json() {
    let mut deck: LoggingDeck<String, Scripted> =
        Deck::new(vec!["a".to_string()], Scripted::default()).into();
    deck.load_json(r#""not a list""#).unwrap();
    deck.load_json("null").unwrap();
    assert!(deck.log().is_empty());

    assert_matches!(deck.load_json("[1]"), Err(DeckError::Json(_)));
    assert!(deck.log().is_empty());
    assert_eq!(deck.top().map(String::as_str), Some("a"));

    deck.load_json(r#"["x", "y"]"#).unwrap();
    assert_eq!(deck.remaining(), 2);
    assert_eq!(
        deck.log().events().collect::<Vec<_>>(),
        vec![&Event::Replace { count: 2 }]
    );
}

#[test]
fn test_ids_follow_log_position() {
    let mut deck = fixture();
    for _ in 0..10 {
        deck.draw_from_bottom();
    }
    let ids: Vec<Id> = deck.log().entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());
    assert_eq!(deck.log().last().map(|e| e.id), Some(deck.log().len() - 1));
}
