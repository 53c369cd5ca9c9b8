use tui_memory::core::{Alphabet, GameConfig, GameState, Shuffler};
use tui_memory::term::{AnchorY, GameView, Viewport};
use tui_memory::types::Symbol;

struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&mut self, _symbols: &mut [Symbol]) {}
}

fn screen_text(fb: &tui_memory::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(GameConfig::default().with_seed(1)).snapshot();
    let view = GameView::default();

    // 4 cards of 7 plus 3 gaps plus border and padding: 35x19.
    let vp = Viewport::new(35, 19);
    let fb = view.render(&snap, None, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(34, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_hides_faces_until_flipped() {
    let alphabet = Alphabet::new(['A', 'B']).unwrap();
    let mut game = GameState::with_parts(GameConfig::default(), alphabet, NoShuffle);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    // Exactly the board frame: no room for the side panel.
    let vp = Viewport::new(35, 20);

    let before = screen_text(&view.render(&game.snapshot(), None, vp));
    assert!(!before.contains('A') && !before.contains('B'));

    game.flip_tile(1).unwrap();
    let fb = view.render(&game.snapshot(), None, vp);
    let after = screen_text(&fb);
    assert!(after.contains('B'));
    assert!(!after.contains('A'));

    // The glyph sits in the middle of its card.
    let snap = game.snapshot();
    let layout = view.layout(&snap, vp);
    assert_eq!((layout.start_x, layout.start_y), (0, 0));
    let (cx, cy) = (2 + 8 + 3, 2 + 1);
    assert_eq!(fb.get(cx, cy).unwrap().ch, 'B');
    assert_eq!(view.tile_at(&snap, vp, cx, cy), Some(1));
}

#[test]
fn term_view_side_panel_shows_counters() {
    let mut game = GameState::new(GameConfig::default().with_seed(3));
    game.flip_tile(0).unwrap();
    game.tick(61_000);

    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Some(0), Viewport::new(80, 24));
    let text = screen_text(&fb);

    assert!(text.contains("MOVES"));
    assert!(text.contains("TIME"));
    assert!(text.contains("1:01"));
    assert!(text.contains("0/8"));
}

#[test]
fn term_view_highlights_cursor_card() {
    let snap = GameState::new(GameConfig::default().with_seed(3)).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(35, 19);

    let plain = view.render(&snap, None, vp);
    let highlighted = view.render(&snap, Some(5), vp);

    // Card 5 is column 1, row 1.
    let (x, y) = (2 + 8, 2 + 4);
    assert_eq!(plain.get(x, y).unwrap().ch, highlighted.get(x, y).unwrap().ch);
    assert_ne!(plain.get(x, y).unwrap().style, highlighted.get(x, y).unwrap().style);
    // Card 0 is untouched.
    assert_eq!(plain.get(2, 2), highlighted.get(2, 2));
}

#[test]
fn term_view_shows_win_overlay_and_congratulations() {
    let alphabet = Alphabet::new(['A', 'B']).unwrap();
    let mut game = GameState::with_parts(GameConfig::default(), alphabet, NoShuffle);
    for index in [0, 2, 1, 3] {
        game.flip_tile(index).unwrap();
    }
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let text = screen_text(&view.render(&game.snapshot(), None, vp));
    assert!(text.contains("YOU WON!"));
    assert!(text.contains("2 moves in 0:00"));
    assert!(!text.contains("Congratulations"));

    game.tick(500);
    let text = screen_text(&view.render(&game.snapshot(), None, vp));
    assert!(text.contains("Congratulations! You won! Moves: 2 Time: 0:00"));
}
