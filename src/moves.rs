use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::state::State;

/// Blank moves leading from one state to another.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    /// Consecutive states must differ by exactly one blank move.
    pub(crate) fn from_states(states: &[State]) -> Self {
        let moves = states
            .windows(2)
            .map(|pair| {
                pair[0]
                    .blank()
                    .dir_to(pair[1].blank())
                    .expect("Consecutive states must be one move apart")
            })
            .collect();
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }

    /// Applies the moves to `state`, `None` if any of them leaves the board.
    pub fn apply(&self, state: &State) -> Option<State> {
        self.iter()
            .try_fold(*state, |cur, &dir| cur.moved(dir))
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![Dir::Up, Dir::Down, Dir::Left, Dir::Right]);
        assert_eq!(moves.to_string(), "UDLR");
        assert_eq!(format!("{:?}", moves), "UDLR");
        assert_eq!(Moves::default().to_string(), "");
    }

    #[test]
    fn moves_between_states() {
        let initial = State::from_rows(&[[2u8, 8, 3], [1, 6, 4], [7, 0, 5]]).unwrap();
        let mut states = vec![initial];
        for &dir in &[Dir::Up, Dir::Up, Dir::Left, Dir::Down, Dir::Right] {
            let next = states.last().unwrap().moved(dir).unwrap();
            states.push(next);
        }

        let moves = Moves::from_states(&states);
        assert_eq!(moves.to_string(), "UULDR");
        assert_eq!(moves.move_cnt(), 5);
        assert_eq!(moves.apply(&initial), Some(*states.last().unwrap()));

        assert!(Moves::from_states(&states[..1]).is_empty());

        let undo = Moves::new(moves.iter().rev().map(|dir| dir.inverse()).collect());
        assert_eq!(undo.to_string(), "LURDD");
        assert_eq!(undo.apply(states.last().unwrap()), Some(initial));
    }

    #[test]
    fn applying_and_counting() {
        let start = State::solved(3).unwrap();

        let mut moves = Moves::default();
        moves.add(Dir::Up);
        moves.add(Dir::Left);
        assert_eq!(moves.move_cnt(), 2);
        let end = moves.apply(&start).unwrap();
        assert_eq!(end.blank(), crate::data::Pos::new(1, 1));

        // blank starts in the bottom right corner
        moves.add(Dir::Left);
        moves.add(Dir::Left);
        assert_eq!(moves.apply(&start), None);

        let collected: Vec<Dir> = moves.clone().into_iter().collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(moves.iter().count(), 4);
        assert_eq!((&moves).into_iter().cloned().collect::<Vec<_>>(), collected);
    }
}
