/// Facing of the controlled character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Tile offset of one step in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The controlled character, positioned in whole tiles
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Player {
            x,
            y,
            direction: Direction::Down,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Steps one tile, staying inside a `width` x `height` map
    ///
    /// Turning always happens; returns false if the step was blocked.
    pub fn step(&mut self, direction: Direction, width: u32, height: u32) -> bool {
        self.direction = direction;
        let (dx, dy) = direction.delta();
        let (nx, ny) = (self.x + dx, self.y + dy);
        if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_map() {
        let mut player = Player::new(1, 1);
        assert!(player.step(Direction::Right, 3, 3));
        assert_eq!(player.position(), (2, 1));
    }

    #[test]
    fn test_step_blocked_at_edge() {
        let mut player = Player::new(0, 0);
        assert!(!player.step(Direction::Up, 3, 3));
        assert_eq!(player.position(), (0, 0));
        assert_eq!(player.direction, Direction::Up);
    }
}
