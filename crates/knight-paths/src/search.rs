use knight_core::Cell;

use crate::KnightPathFinder;
use crate::error::FindError;
use crate::finder::{NO_PARENT, SearchNode};
use crate::moves::KnightMoves;
use crate::path::KnightPath;
use crate::traits::Pather;

impl KnightPathFinder {
    /// Find every knight path of exactly `moves` moves from `source` to
    /// `destination`.
    ///
    /// The search is breadth-first over `(cell, distance)` with a visited
    /// set keyed by cell alone: a cell is expanded only from the first node
    /// that reaches it. Later nodes on the same cell are still matched
    /// against the destination, but never expanded. Routes whose prefix is
    /// not the first route into some intermediate cell are therefore not
    /// reported.
    ///
    /// Paths come back in the order their final nodes are dequeued. An
    /// unreachable destination yields an empty list. With `moves == 0` the
    /// result is a single empty path if `source == destination`.
    pub fn find(
        &mut self,
        moves: i32,
        source: Cell,
        destination: Cell,
    ) -> Result<Vec<KnightPath>, FindError> {
        let knight = KnightMoves::new(self.board);
        self.find_with(&knight, moves, source, destination)
    }

    /// Like [`find`](Self::find), but with neighbours supplied by `pather`.
    ///
    /// Neighbours off the board are ignored.
    pub fn find_with<P: Pather>(
        &mut self,
        pather: &P,
        moves: i32,
        source: Cell,
        destination: Cell,
    ) -> Result<Vec<KnightPath>, FindError> {
        if moves < 0 {
            return Err(FindError::NegativeMoves(moves));
        }
        self.check(source)?;
        self.check(destination)?;

        self.reset();
        self.nodes.push(SearchNode {
            cell: source,
            distance: 0,
            parent: NO_PARENT,
        });
        self.queue.push_back(0);

        let mut paths = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let result = 'search: loop {
            let Some(ni) = self.queue.pop_front() else {
                break 'search Ok(());
            };
            let node = self.nodes[ni];

            // Everything still queued is at least this deep.
            if node.distance > moves {
                break 'search Ok(());
            }

            if node.cell == destination && node.distance == moves {
                match self.reconstruct(ni) {
                    Ok(path) => {
                        log::trace!("path {}: {path}", paths.len() + 1);
                        paths.push(path);
                    }
                    Err(e) => break 'search Err(e),
                }
            }

            let Some(ci) = self.board.idx(node.cell) else {
                continue;
            };
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;

            nbuf.clear();
            pather.neighbors(node.cell, &mut nbuf);

            for &np in nbuf.iter() {
                if !self.board.contains(np) {
                    continue;
                }
                self.nodes.push(SearchNode {
                    cell: np,
                    distance: node.distance + 1,
                    parent: ni,
                });
                self.queue.push_back(self.nodes.len() - 1);
            }
        };

        self.nbuf = nbuf;
        result?;

        log::debug!(
            "{} board, {moves} moves, {source} -> {destination}: {} paths ({} nodes)",
            self.board,
            paths.len(),
            self.nodes.len()
        );
        Ok(paths)
    }
}
