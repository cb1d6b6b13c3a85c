use blind_solver::{
    CornerLabel, Corners, Cube, EdgeLabel, Edges, Label, LabelLookupError, MoveSequence, Orbit,
    SolveError, StickerGrid,
    algs::{corner_swap, edge_swap, parity_fix},
    memo::unsolved_labels,
    memorize, solve, solve_to_string,
};

/// Edge slots, each starting from its U or D sticker, or its F or B sticker
/// for the middle layer.
const EDGE_SLOTS: [[EdgeLabel; 2]; 12] = {
    use EdgeLabel::*;
    [
        [B, M], [C, I], [D, E], [A, Q], [U, K], [V, O],
        [W, S], [X, G], [J, P], [L, F], [R, H], [T, N],
    ]
};

/// Corner slots, each clockwise from its U or D sticker.
const CORNER_SLOTS: [[CornerLabel; 3]; 8] = {
    use CornerLabel::*;
    [
        [A, E, R], [B, Q, N], [C, M, J], [D, I, F],
        [V, K, P], [U, G, L], [X, S, H], [W, O, T],
    ]
};

/// Puts the piece lettered `from` into the slot lettered `to`, pairing their
/// stickers in order.
fn place<L: Label>(cube: &mut Cube, from: &[L], to: &[L]) {
    for (&from, &to) in from.iter().zip(to) {
        cube.set(to.sticker(), from.sticker().face.solved_color());
    }
}

/// Sends the piece in each slot to the next slot of `cycle`, the last one
/// wrapping around to the first.
fn cycle<L: Label, const N: usize>(cube: &mut Cube, cycle: &[[L; N]]) {
    for (i, from) in cycle.iter().enumerate() {
        place(cube, from, &cycle[(i + 1) % cycle.len()]);
    }
}

/// Fills `slots[i]` with the piece from `slots[pieces[i]]`, its first sticker
/// landing `turns[i]` places along.
fn scatter<L: Label, const N: usize>(
    cube: &mut Cube,
    slots: &[[L; N]],
    pieces: &[usize],
    turns: &[usize],
) {
    for (i, slot) in slots.iter().enumerate() {
        let to: [L; N] = std::array::from_fn(|j| slot[(j + turns[i]) % N]);
        place(cube, &slots[pieces[i]], &to);
    }
}

fn is_odd(permutation: &[usize]) -> bool {
    let mut seen = vec![false; permutation.len()];
    let mut odd = false;
    for start in 0..permutation.len() {
        let mut len = 0;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = permutation[i];
            len += 1;
        }
        if len > 0 && len % 2 == 0 {
            odd = !odd;
        }
    }
    odd
}

/// A random cube reachable by turning, and whether its edge permutation is
/// odd.
fn random_cube(rng: &mut fastrand::Rng) -> (Cube, bool) {
    let mut edges = (0..12).collect::<Vec<usize>>();
    let mut corners = (0..8).collect::<Vec<usize>>();
    rng.shuffle(&mut edges);
    rng.shuffle(&mut corners);

    let odd = is_odd(&edges);
    if odd != is_odd(&corners) {
        corners.swap(0, 1);
    }

    let mut flips = (0..12).map(|_| rng.usize(0..2)).collect::<Vec<_>>();
    flips[11] = flips[..11].iter().sum::<usize>() % 2;
    let mut twists = (0..8).map(|_| rng.usize(0..3)).collect::<Vec<_>>();
    twists[7] = (3 - twists[..7].iter().sum::<usize>() % 3) % 3;

    let mut cube = Cube::solved();
    scatter(&mut cube, &EDGE_SLOTS, &edges, &flips);
    scatter(&mut cube, &CORNER_SLOTS, &corners, &twists);
    (cube, odd)
}

/// Every piece left to solve is named once or twice, and the buffer is named
/// only when it stands in for an orbit with nothing to solve.
fn check_memo<O: Orbit>(cube: &Cube) {
    let memo = memorize::<O>(cube).unwrap();
    let unsolved = unsolved_labels::<O>(cube);

    for &label in memo.labels() {
        if O::is_buffer(label) {
            assert!(unsolved.is_empty(), "{} memo {memo}", O::NAME);
            assert_eq!(memo.len(), 1);
        } else {
            assert!(unsolved.contains(&label), "{} memo {memo}", O::NAME);
        }
    }

    for &label in &unsolved {
        let piece = O::piece_of(label);
        let named = memo
            .labels()
            .iter()
            .filter(|&&other| piece.contains(&other))
            .count();
        assert!((1..=2).contains(&named), "{} memo {memo}: {label}", O::NAME);
    }
}

fn concat<'a>(algs: impl IntoIterator<Item = &'a MoveSequence>) -> MoveSequence {
    let mut out = MoveSequence::default();
    for alg in algs {
        out.extend_from_slice(alg);
    }
    out
}

fn edge(label: EdgeLabel) -> &'static MoveSequence {
    edge_swap(label).unwrap()
}

fn corner(label: CornerLabel) -> &'static MoveSequence {
    corner_swap(label).unwrap()
}

fn scrambled() -> Cube {
    use CornerLabel as C;
    use EdgeLabel as E;

    let mut cube = Cube::solved();
    cycle(&mut cube, &[[E::B, E::M], [E::I, E::C], [E::J, E::P]]);
    place(&mut cube, &[E::K, E::U], &[E::U, E::K]);
    cycle(
        &mut cube,
        &[[C::I, C::F, C::D], [C::L, C::G, C::U], [C::J, C::C, C::M]],
    );
    place(&mut cube, &[C::T, C::O, C::W], &[C::W, C::T, C::O]);
    cube
}

#[test_log::test]
fn solved_cube_needs_no_moves() {
    let solution = solve(&Cube::solved()).unwrap();

    assert_eq!(solution.edge_memo.labels(), [EdgeLabel::B]);
    assert_eq!(solution.corner_memo.labels(), [CornerLabel::A]);
    assert!(!solution.parity);
    assert!(solution.moves.is_empty());
    assert_eq!(solve_to_string(&Cube::solved()).unwrap(), "");
}

#[test_log::test]
fn buffer_swapped_with_one_edge_needs_parity() {
    use EdgeLabel::*;

    let mut cube = Cube::solved();
    cycle(&mut cube, &[[B, M], [D, E]]);

    let solution = solve(&cube).unwrap();
    assert_eq!(solution.edge_memo.labels(), [D]);
    assert!(solution.parity);
    assert_eq!(solution.moves, concat([parity_fix()]));
}

#[test_log::test]
fn random_cubes_memorize_every_piece() {
    let mut rng = fastrand::Rng::with_seed(0x0b1d_f01d);

    for _ in 0..500 {
        let (cube, odd) = random_cube(&mut rng);

        let solution = solve(&cube).unwrap();
        assert_eq!(solution.parity, odd, "edge memo {}", solution.edge_memo);

        check_memo::<Edges>(&cube);
        check_memo::<Corners>(&cube);
    }
}

#[test_log::test]
fn edge_three_cycle() {
    use EdgeLabel::*;

    let mut cube = Cube::solved();
    cycle(&mut cube, &[[I, C], [J, P], [K, U]]);

    let solution = solve(&cube).unwrap();
    assert_eq!(solution.edge_memo.labels(), [C, U, P, C]);
    assert!(!solution.parity);
    assert_eq!(solution.corner_memo.labels(), [CornerLabel::A]);
    assert_eq!(solution.moves, concat([edge(U), edge(P), edge(C)]));
}

#[test_log::test]
fn edge_three_cycle_from_fixture() {
    use EdgeLabel::*;

    let cube = Cube::from_toml(include_str!("fixtures/edge_three_cycle.toml")).unwrap();

    let mut expected = Cube::solved();
    cycle(&mut expected, &[[I, C], [J, P], [K, U]]);
    assert_eq!(cube, expected);

    assert_eq!(memorize::<Edges>(&cube).unwrap().labels(), [C, U, P, C]);
}

#[test_log::test]
fn solved_fixture_loads() {
    let cube = Cube::from_toml(include_str!("fixtures/solved.toml")).unwrap();
    assert_eq!(cube, Cube::solved());
}

#[test_log::test]
fn edge_transposition_needs_parity() {
    use EdgeLabel::*;

    let mut cube = Cube::solved();
    cycle(&mut cube, &[[I, C], [J, P]]);

    let solution = solve(&cube).unwrap();
    assert_eq!(solution.edge_memo.labels(), [C, P, C]);
    assert!(solution.parity);
    assert_eq!(solution.moves, concat([edge(P), edge(C), parity_fix()]));
}

#[test_log::test]
fn every_edge_transposition_has_odd_memo() {
    let pieces = Edges::PIECES
        .iter()
        .filter(|piece| !Edges::is_buffer(piece[0]))
        .collect::<Vec<_>>();

    for (i, a) in pieces.iter().enumerate() {
        for b in &pieces[i + 1..] {
            let mut cube = Cube::solved();
            place(&mut cube, a, b);
            place(&mut cube, b, a);

            let memo = memorize::<Edges>(&cube).unwrap();
            assert_eq!(memo.len(), 3, "{a:?} {b:?}: {memo}");
            assert!(memo.has_odd_length());
            assert!(memo.labels().iter().all(|&label| !Edges::is_buffer(label)));
        }
    }
}

#[test_log::test]
fn corner_three_cycle() {
    use CornerLabel::*;

    let mut cube = Cube::solved();
    cycle(&mut cube, &[[I, F, D], [L, G, U], [J, C, M]]);

    let solution = solve(&cube).unwrap();
    assert_eq!(solution.edge_memo.labels(), [EdgeLabel::B]);
    assert!(!solution.parity);
    assert_eq!(solution.corner_memo.labels(), [C, G, F, C]);
    assert_eq!(solution.moves, concat([corner(G), corner(F), corner(C)]));
}

#[test_log::test]
fn flipped_and_twisted_pieces_close_after_two_letters() {
    for piece in Edges::PIECES.iter().filter(|piece| !Edges::is_buffer(piece[0])) {
        let mut cube = Cube::solved();
        place(&mut cube, piece, &[piece[1], piece[0]]);

        let first = piece[0].min(piece[1]);
        let second = piece[0].max(piece[1]);
        let memo = memorize::<Edges>(&cube).unwrap();
        assert_eq!(memo.labels(), [first, second], "{piece:?}");
    }

    for piece in Corners::PIECES.iter().filter(|piece| !Corners::is_buffer(piece[0])) {
        for twist in [1, 2] {
            let mut cube = Cube::solved();
            let twisted = [0, 1, 2].map(|i| piece[(i + twist) % 3]);
            place(&mut cube, piece, &twisted);

            let memo = memorize::<Corners>(&cube).unwrap();
            assert_eq!(memo.len(), 2, "{piece:?} twisted {twist}: {memo}");
            assert_eq!(Corners::piece_of(memo.targets()[0]), *piece);
        }
    }
}

#[test_log::test]
fn buffer_in_a_cycle_seeds_the_memo() {
    use EdgeLabel::*;

    let mut cube = Cube::solved();
    cycle(&mut cube, &[[B, M], [I, C], [J, P]]);

    let solution = solve(&cube).unwrap();
    assert_eq!(solution.edge_memo.labels(), [J, I]);
    assert!(!solution.parity);
    assert_eq!(solution.moves, concat([edge(I)]));
}

#[test_log::test]
fn cycles_reseed_at_first_unsolved_letter() {
    use EdgeLabel::*;

    // Two flipped edges: the first cycle closes by naming its piece twice.
    let mut cube = Cube::solved();
    place(&mut cube, &[I, C], &[C, I]);
    place(&mut cube, &[J, P], &[P, J]);
    let memo = memorize::<Edges>(&cube).unwrap();
    assert_eq!(memo.labels(), [C, I, J, P]);
    assert!(!memo.has_odd_length());

    // The buffer's cycle closes when its slot comes back around.
    let solution = solve(&scrambled()).unwrap();
    assert_eq!(solution.edge_memo.labels(), [J, I, K, U]);
    assert_eq!(
        solution.corner_memo.labels(),
        [
            CornerLabel::C,
            CornerLabel::G,
            CornerLabel::F,
            CornerLabel::C,
            CornerLabel::O,
            CornerLabel::W,
        ]
    );
}

#[test_log::test]
fn parity_fix_sits_between_edges_and_corners() {
    let mut cube = Cube::solved();
    {
        use EdgeLabel::*;
        cycle(&mut cube, &[[I, C], [J, P]]);
    }
    {
        use CornerLabel::*;
        cycle(&mut cube, &[[I, F, D], [J, C, M]]);
    }

    let solution = solve(&cube).unwrap();
    assert!(solution.parity);
    assert_eq!(
        solution.corner_memo.labels(),
        [CornerLabel::C, CornerLabel::F, CornerLabel::C]
    );
    assert_eq!(
        solution.moves,
        concat([
            edge(EdgeLabel::P),
            edge(EdgeLabel::C),
            parity_fix(),
            corner(CornerLabel::F),
            corner(CornerLabel::C),
        ])
    );
}

#[test_log::test]
fn solving_is_repeatable_and_leaves_the_cube_alone() {
    let cube = scrambled();
    let before = cube.clone();

    let first = solve_to_string(&cube).unwrap();
    let second = solve_to_string(&cube).unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
    assert_eq!(cube, before);
}

#[test_log::test]
fn memos_never_target_the_buffer() {
    let solution = solve(&scrambled()).unwrap();
    assert!(
        solution
            .edge_memo
            .targets()
            .iter()
            .all(|&label| !Edges::is_buffer(label))
    );
    assert!(
        solution
            .corner_memo
            .targets()
            .iter()
            .all(|&label| !Corners::is_buffer(label))
    );
}

#[test_log::test]
fn duplicated_piece_is_an_invalid_state() {
    use EdgeLabel::*;

    // The J/P piece shows up in its own slot and in I/C's.
    let mut cube = Cube::solved();
    place(&mut cube, &[J, P], &[I, C]);

    assert_eq!(
        solve(&cube),
        Err(SolveError::InvalidCubeState {
            orbit: "edge",
            budget: 2,
        })
    );
}

#[test_log::test]
fn unreadable_piece_is_a_lookup_error() {
    let mut cube = Cube::solved();
    cube.set(
        EdgeLabel::C.sticker(),
        cube.color(EdgeLabel::I.sticker()),
    );

    assert!(matches!(
        solve(&cube),
        Err(SolveError::LabelLookup(LabelLookupError::UnknownPiece { sticker, .. }))
            if sticker == EdgeLabel::C.sticker()
    ));
}
