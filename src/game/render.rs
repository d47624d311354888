use std::fmt;

use super::{World, ENEMY_GLYPH, PROJECTILE_GLYPH, SHIP_HEIGHT, SHIP_SPRITE};

/// Draws `world` as a block of text: one line per row, no trailing newline.
/// Nothing is drawn until the viewport has a size.
///
/// Anything that falls outside the grid (a ship hugging the right edge,
/// leftovers after the terminal shrank) is clipped.
pub fn render(world: &World) -> String {
    if world.rows <= 0 {
        return String::new();
    }

    let mut grid = Grid::new(world.columns, world.rows);

    for shot in &world.projectiles {
        grid.put(shot.column, shot.row, PROJECTILE_GLYPH);
    }
    // Enemies go on top of any shot sharing their cell.
    for enemy in &world.enemies {
        grid.put(enemy.column, enemy.row, ENEMY_GLYPH);
    }

    for (offset, digit) in world.points.to_string().chars().enumerate() {
        grid.put(1 + offset as i32, 1, digit);
    }

    let top = world.rows - SHIP_HEIGHT;
    for &(dx, dy, glyph) in &SHIP_SPRITE {
        grid.put(world.pos + dx, top + dy, glyph);
    }

    grid.to_string()
}

struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new(columns: i32, rows: i32) -> Self {
        let columns = columns.max(0) as usize;
        let rows = rows.max(0) as usize;
        Self {
            cells: vec![vec![' '; columns]; rows],
        }
    }

    fn put(&mut self, column: i32, row: i32, glyph: char) {
        let (Ok(column), Ok(row)) = (usize::try_from(column), usize::try_from(row)) else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(row).and_then(|line| line.get_mut(column)) {
            *cell = glyph;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in line {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn world(columns: i32, rows: i32) -> World {
        World {
            columns,
            rows,
            ..World::default()
        }
    }

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn unsized_world_renders_nothing() {
        let mut w = world(30, 0);
        w.points = 12;
        w.enemies.push(Position::new(3, 3));
        w.projectiles.push(Position::new(4, 4));
        assert_eq!(render(&w), "");
    }

    #[test]
    fn frame_has_exact_shape_and_no_trailing_newline() {
        let text = render(&world(12, 6));
        assert!(!text.ends_with('\n'));
        let rows = lines(&text);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.chars().count() == 12));
    }

    #[test]
    fn ship_and_score_layout() {
        let mut w = world(8, 5);
        w.pos = 1;
        let text = render(&w);
        assert_eq!(
            lines(&text),
            vec![
                "        ",
                " 0      ",
                "   _    ",
                "  / \\   ",
                " /___\\  ",
            ]
        );
    }

    #[test]
    fn projectiles_and_enemies_are_stamped() {
        let mut w = world(10, 6);
        w.projectiles.push(Position::new(6, 0));
        w.enemies.push(Position::new(8, 2));
        let rows = lines(&render(&w)).iter().map(|r| r.to_string()).collect::<Vec<_>>();
        assert_eq!(rows[0].chars().nth(6), Some(PROJECTILE_GLYPH));
        assert_eq!(rows[2].chars().nth(8), Some(ENEMY_GLYPH));
    }

    #[test]
    fn enemy_wins_a_shared_cell() {
        let mut w = world(10, 6);
        w.projectiles.push(Position::new(4, 2));
        w.enemies.push(Position::new(4, 2));
        let text = render(&w);
        assert_eq!(lines(&text)[2].chars().nth(4), Some(ENEMY_GLYPH));
        assert!(!text.contains(PROJECTILE_GLYPH));
    }

    #[test]
    fn multi_digit_score_spills_into_neighbouring_cells() {
        let mut w = world(10, 6);
        w.points = 123;
        w.enemies.push(Position::new(2, 1));
        let text = render(&w);
        assert_eq!(lines(&text)[1], " 123      ");
    }

    #[test]
    fn out_of_bounds_entities_are_clipped() {
        let mut w = world(6, 4);
        w.pos = 4;
        w.enemies.push(Position::new(30, 1));
        w.enemies.push(Position::new(2, 10));
        w.projectiles.push(Position::new(-3, -1));
        let text = render(&w);
        let rows = lines(&text);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.chars().count() == 6));
        assert_eq!(rows[3], "    /_");
        assert!(!text.contains(ENEMY_GLYPH));
    }

    #[test]
    fn zero_columns_yields_blank_rows() {
        assert_eq!(render(&world(0, 3)), "\n\n");
    }
}
