use super::grid::TILE_SIZE;
use super::state::{Body, Cell, CollisionType};

/// Whether moving the head onto `candidate` ends the game
///
/// `bounds` is the board extent in pixels. Walls are checked before the body
/// scan so an off-board candidate never walks the queue.
pub fn is_blocked(candidate: Cell, bounds: i32, body: &Body) -> bool {
    check_collision(candidate, bounds, body).is_some()
}

/// Classify what `candidate` would run into, if anything
pub fn check_collision(candidate: Cell, bounds: i32, body: &Body) -> Option<CollisionType> {
    if !in_bounds(candidate, bounds) {
        return Some(CollisionType::Wall);
    }

    if body.contains(candidate) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

fn in_bounds(cell: Cell, bounds: i32) -> bool {
    let max = bounds - TILE_SIZE;
    cell.x >= 0 && cell.x <= max && cell.y >= 0 && cell.y <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::GRID_EXTENT;

    fn body_of(cells: &[(i32, i32)]) -> Body {
        let mut body = Body::new();
        for &(x, y) in cells {
            body.push(Cell::new(x, y));
        }
        body
    }

    #[test]
    fn test_walls() {
        let body = body_of(&[(100, 100)]);

        assert!(is_blocked(Cell::new(-10, 100), GRID_EXTENT, &body));
        assert!(is_blocked(Cell::new(100, -10), GRID_EXTENT, &body));
        assert!(is_blocked(Cell::new(240, 100), GRID_EXTENT, &body));
        assert!(is_blocked(Cell::new(100, 240), GRID_EXTENT, &body));
        assert!(!is_blocked(Cell::new(230, 230), GRID_EXTENT, &body));
        assert!(!is_blocked(Cell::new(0, 0), GRID_EXTENT, &body));
    }

    #[test]
    fn test_walls_for_any_body() {
        let empty = Body::new();
        let long = body_of(&[(0, 0), (10, 0), (20, 0), (20, 10)]);

        for body in [&empty, &long] {
            for offset in [-30, -10, -1] {
                assert!(is_blocked(Cell::new(offset, 50), GRID_EXTENT, body));
                assert!(is_blocked(Cell::new(50, offset), GRID_EXTENT, body));
            }
            for over in [231, 240, 1000] {
                assert!(is_blocked(Cell::new(over, 50), GRID_EXTENT, body));
                assert!(is_blocked(Cell::new(50, over), GRID_EXTENT, body));
            }
        }
    }

    #[test]
    fn test_self_overlap() {
        let body = body_of(&[(100, 100), (110, 100), (120, 100), (120, 110)]);

        assert_eq!(
            check_collision(Cell::new(120, 100), GRID_EXTENT, &body),
            Some(CollisionType::SelfCollision)
        );
        assert_eq!(check_collision(Cell::new(130, 110), GRID_EXTENT, &body), None);
        assert_eq!(
            check_collision(Cell::new(-10, 100), GRID_EXTENT, &body),
            Some(CollisionType::Wall)
        );
    }

    #[test]
    fn test_self_overlap_across_wraparound() {
        // slide the body until the ring cursors have wrapped several times
        let mut body = Body::new();
        let mut x = 0;
        body.push(Cell::new(x, 0));
        for _ in 0..(body.capacity() + 7) {
            x = (x + 10) % GRID_EXTENT;
            body.push(Cell::new(x, 0));
            body.pop().unwrap();
        }
        let tail = body.oldest().unwrap();
        body.push(Cell::new(tail.x, 10));
        body.push(Cell::new(tail.x, 20));

        assert!(body.tail_index() > 0);
        assert!(is_blocked(tail, GRID_EXTENT, &body));
        assert!(is_blocked(Cell::new(tail.x, 20), GRID_EXTENT, &body));
        assert!(!is_blocked(Cell::new(tail.x, 30), GRID_EXTENT, &body));
    }
}
