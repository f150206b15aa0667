use lightbox_common::{GalleryGroup, GalleryItem, ViewerState};

fn group_of(len: usize) -> GalleryGroup {
    let items = (0..len)
        .map(|i| GalleryItem::new(format!("img-{i}.jpg"), None))
        .collect();
    GalleryGroup::with_items("laws", items)
}

fn opened_at(len: usize, start: usize) -> ViewerState {
    let mut state = ViewerState::new();
    let index = state.open(group_of(len), &format!("img-{start}.jpg"));
    assert_eq!(index, Some(start));
    state
}

#[test]
fn next_len_times_returns_to_start() {
    for len in 1..=7 {
        for start in 0..len {
            let mut state = opened_at(len, start);
            for _ in 0..len {
                state.next();
            }
            assert_eq!(state.current_index(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn prev_len_times_returns_to_start() {
    for len in 1..=7 {
        for start in 0..len {
            let mut state = opened_at(len, start);
            for _ in 0..len {
                state.prev();
            }
            assert_eq!(state.current_index(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn next_then_prev_is_identity() {
    for len in 1..=7 {
        for start in 0..len {
            let mut state = opened_at(len, start);
            state.next();
            state.prev();
            assert_eq!(state.current_index(), start);

            state.prev();
            state.next();
            assert_eq!(state.current_index(), start);
        }
    }
}

#[test]
fn counter_tracks_every_move() {
    let len = 5;
    let mut state = opened_at(len, 3);
    assert_eq!(state.counter_label().as_deref(), Some("4 / 5"));

    let moves: [fn(&mut ViewerState) -> Option<usize>; 4] = [
        ViewerState::next,
        ViewerState::next,
        ViewerState::prev,
        ViewerState::next,
    ];
    for step in moves {
        step(&mut state);
        let expected = format!("{} / {}", state.current_index() + 1, len);
        assert_eq!(state.counter_label(), Some(expected));
    }

    assert!(state.show(1));
    assert_eq!(state.counter_label().as_deref(), Some("2 / 5"));
}

#[test]
fn caption_hidden_iff_empty() {
    let group = GalleryGroup::with_items(
        "captions",
        vec![
            GalleryItem::new("a.jpg", Some("First".into())),
            GalleryItem::new("b.jpg", Some(String::new())),
            GalleryItem::new("c.jpg", None),
        ],
    );
    let mut state = ViewerState::new();
    state.open(group, "a.jpg");

    let mut seen = Vec::new();
    for _ in 0..3 {
        let item = state.active_item().unwrap();
        assert_eq!(state.caption_visible(), !item.caption.is_empty());
        seen.push(state.caption_visible());
        state.next();
    }
    assert_eq!(seen, vec![true, false, false]);
}
