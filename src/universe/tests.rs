#[cfg(test)]
mod tests {
    use crate::{Cell, Universe};
    use proptest::prelude::*;

    const SEED: u64 = 42;

    /// Builds a field from rows of `#` (alive) and `.` (dead).
    fn field(rows: &[&str]) -> Universe {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let cells = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| Cell::from(c == '#')))
            .collect();
        Universe::from_cells(width, height, cells).unwrap()
    }

    fn picture(life: &Universe) -> Vec<String> {
        life.cells()
            .chunks(life.width() as usize)
            .map(|row| row.iter().map(|&c| if c.is_alive() { '#' } else { '.' }).collect())
            .collect()
    }

    fn counts(rows: &[[u8; 5]]) -> Vec<u8> {
        rows.iter().flatten().copied().collect()
    }

    /// Neighbour counts from scratch with signed offsets and `rem_euclid`.
    fn brute_force_counts(life: &Universe) -> Vec<u8> {
        let (w, h) = (life.width() as i64, life.height() as i64);
        let mut result = Vec::with_capacity((w * h) as usize);
        for row in 0..h {
            for col in 0..w {
                let mut n = 0;
                for dr in -1..=1i64 {
                    for dc in -1..=1i64 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let r = (row + dr).rem_euclid(h);
                        let c = (col + dc).rem_euclid(w);
                        n += life.cells()[(r * w + c) as usize] as u8;
                    }
                }
                result.push(n);
            }
        }
        result
    }

    #[test]
    fn test_single_cell_dies() {
        let mut life = field(&["...", ".#.", "..."]);
        assert_eq!(life.alive_neighbours(), &[1, 1, 1, 1, 0, 1, 1, 1, 1]);

        life.tick();

        assert_eq!(life.population(), 0);
        assert_eq!(life.alive_neighbours(), &[0; 9]);
    }

    #[test]
    fn test_full_width_row_on_3x3() {
        let mut life = field(&["...", "###", "..."]);
        // on a 3x3 torus every cell sees all other 8 cells
        assert_eq!(life.alive_neighbours(), &[3, 3, 3, 2, 2, 2, 3, 3, 3]);

        // the row survives with 2 neighbours each and every dead cell is born with 3
        life.tick();
        assert_eq!(picture(&life), ["###", "###", "###"]);
        assert_eq!(life.alive_neighbours(), &[8; 9]);

        life.tick();
        assert_eq!(picture(&life), ["...", "...", "..."]);
        assert_eq!(life.alive_neighbours(), &[0; 9]);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut life = field(&["....", ".##.", ".##.", "...."]);
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(life.neighbours_of(row, col), 3);
        }
        let cells = life.cells().to_vec();
        let neighbours = life.alive_neighbours().to_vec();

        for _ in 0..5 {
            life.tick();
            assert_eq!(life.cells(), &cells[..]);
            assert_eq!(life.alive_neighbours(), &neighbours[..]);
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut life = field(&[".....", ".....", ".###.", ".....", "....."]);
        let initial = life.cells().to_vec();
        assert_eq!(
            life.alive_neighbours(),
            &counts(&[
                [0, 0, 0, 0, 0],
                [1, 2, 3, 2, 1],
                [1, 1, 2, 1, 1],
                [1, 2, 3, 2, 1],
                [0, 0, 0, 0, 0],
            ])[..]
        );

        life.tick();
        assert_eq!(
            picture(&life),
            [".....", "..#..", "..#..", "..#..", "....."]
        );
        assert_eq!(
            life.alive_neighbours(),
            &counts(&[
                [0, 1, 1, 1, 0],
                [0, 2, 1, 2, 0],
                [0, 3, 2, 3, 0],
                [0, 2, 1, 2, 0],
                [0, 1, 1, 1, 0],
            ])[..]
        );

        life.tick();
        assert_eq!(life.cells(), &initial[..]);
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        // a glider moves one cell diagonally every 4 generations
        let mut life = Universe::from_rle(b"x = 8, y = 8, rule = B3/S23\nbo$2bo$3o!").unwrap();
        let initial = life.cells().to_vec();

        life.update(4);
        assert_ne!(life.cells(), &initial[..]);
        assert_eq!(life.population(), 5);

        life.update(28);
        assert_eq!(life.cells(), &initial[..]);
        assert_eq!(life.generation(), 32);
    }

    #[test]
    fn test_single_cell_field_counts_itself() {
        let mut life = field(&["#"]);
        // all 8 wrapped neighbours are the cell itself
        assert_eq!(life.alive_neighbours(), &[8]);

        life.tick();
        assert_eq!(life.cells(), &[Cell::Dead]);
        assert_eq!(life.alive_neighbours(), &[0]);

        life.tick();
        assert_eq!(life.cells(), &[Cell::Dead]);
    }

    #[test]
    fn test_thin_fields_count_duplicates() {
        // on a 1x2 field the rows above and below are the row itself, and
        // the left and right neighbours are the same cell
        let life = field(&["#."]);
        assert_eq!(life.alive_neighbours(), &[2, 6]);
        assert_eq!(life.alive_neighbours(), &brute_force_counts(&life)[..]);

        for (w, h) in [(1, 7), (7, 1), (2, 5), (5, 2)] {
            let mut life = Universe::random(w, h, Some(SEED), 0.5).unwrap();
            for _ in 0..10 {
                life.tick();
                assert_eq!(life.alive_neighbours(), &brute_force_counts(&life)[..]);
            }
        }
    }

    #[test]
    fn test_counts_match_brute_force() {
        use rand::{Rng, SeedableRng};

        let mut life = Universe::random(37, 23, Some(SEED), 0.35).unwrap();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
        for _ in 0..20 {
            for _ in 0..10 {
                let (row, col) = (rng.gen::<u32>(), rng.gen::<u32>());
                if rng.gen_bool(0.5) {
                    life.toggle_cell(row, col);
                } else {
                    life.set_cell(row, col, Cell::from(rng.gen_bool(0.5)));
                }
                assert_eq!(life.alive_neighbours(), &brute_force_counts(&life)[..]);
            }
            life.tick();
            assert_eq!(life.alive_neighbours(), &brute_force_counts(&life)[..]);
        }
    }

    #[test]
    fn test_determinism() {
        let mut life_a = Universe::random(48, 32, Some(SEED), 0.4).unwrap();
        let mut life_b = Universe::random(48, 32, Some(SEED), 0.4).unwrap();
        assert_eq!(life_a, life_b);

        for _ in 0..50 {
            life_a.tick();
            life_b.tick();
            assert_eq!(life_a.cells(), life_b.cells());
            assert_eq!(life_a.alive_neighbours(), life_b.alive_neighbours());
        }

        let other = Universe::random(48, 32, Some(SEED + 1), 0.4).unwrap();
        assert_ne!(other.cells(), Universe::random(48, 32, Some(SEED), 0.4).unwrap().cells());
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let mut life = Universe::random(16, 9, Some(SEED), 0.5).unwrap();
        life.tick();
        let (cells, neighbours) = (life.cells().to_vec(), life.alive_neighbours().to_vec());
        assert_eq!(life.cells(), &cells[..]);
        assert_eq!(life.alive_neighbours(), &neighbours[..]);
        assert_eq!(life.cells(), life.cells());
        assert_eq!(life.width(), 16);
        assert_eq!(life.height(), 9);
    }

    #[test]
    fn test_default_pattern() {
        let life = Universe::default();
        assert_eq!((life.width(), life.height()), (64, 64));
        for (i, &cell) in life.cells().iter().enumerate() {
            assert_eq!(cell.is_alive(), i % 2 == 0 || i % 7 == 0, "cell {}", i);
        }
        assert_eq!(life, Universe::new(64, 64));
        assert_eq!(life.alive_neighbours(), &brute_force_counts(&life)[..]);
    }

    #[test]
    fn test_edits_wrap_coordinates() {
        let mut life = Universe::blank(4, 3).unwrap();
        life.set_cell(5, 9, Cell::Alive);
        assert_eq!(life.get_cell(2, 1), Cell::Alive);
        assert_eq!(life.neighbours_of(1, 0), 1);
        assert_eq!(life.neighbours_of(0, 2), 1);

        life.toggle_cell(2, 1);
        assert_eq!(life.population(), 0);
        assert_eq!(life.alive_neighbours(), &[0; 12]);
    }

    #[test]
    fn test_render() {
        let life = field(&["#..", ".#."]);
        assert_eq!(life.render(), "◼◻◻\n◻◼◻\n");
    }

    #[test]
    fn test_invalid_construction() {
        assert!(Universe::try_new(0, 3).is_err());
        assert!(Universe::blank(3, 0).is_err());
        assert!(Universe::random(3, 3, None, 1.5).is_err());
        assert!(Universe::random(3, 3, None, f64::NAN).is_err());
        assert!(Universe::from_cells(3, 3, vec![Cell::Alive; 8]).is_err());
        assert!(Universe::from_rle(b"x = 2, y = 2\n3o!").is_err());
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_empty_field() {
        Universe::new(0, 1);
    }

    proptest! {
        #[test]
        fn buffers_keep_length(w in 1u32..24, h in 1u32..24, seed in any::<u64>(), ticks in 0u64..6) {
            let mut life = Universe::random(w, h, Some(seed), 0.5).unwrap();
            let size = (w * h) as usize;
            for _ in 0..ticks {
                prop_assert_eq!(life.cells().len(), size);
                prop_assert_eq!(life.alive_neighbours().len(), size);
                life.tick();
            }
            prop_assert_eq!(life.cells().len(), size);
            prop_assert_eq!(life.alive_neighbours().len(), size);
            prop_assert!(life.alive_neighbours().iter().all(|&n| n <= 8));
            prop_assert_eq!(life.alive_neighbours(), &brute_force_counts(&life)[..]);
        }
    }
}
