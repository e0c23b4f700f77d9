//! Game state module - board plus per-cell user and animation state
//!
//! `GameState` owns everything the frame loop mutates: the generated board, the
//! mark/animation/hover state of every cell, the active tool, the focused cell
//! and the queue of pending input events.
//!
//! Input events are queued by the windowing side and drained by the frame loop
//! before it animates, so every event delivered between two ticks is observed by
//! the next one. Pointer moves simply overwrite the previous position.

use std::collections::VecDeque;

use crate::board::Board;
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{
    CellPos, GameEvent, Mark, PointerButton, Tool, ANIM_FAST_STEP, BOARD_SIZE, HOVER_LIFT,
    OPEN_MARGIN, WINDOW_SIZE,
};

/// Upper bound on queued events; older events are dropped first.
const MAX_PENDING_EVENTS: usize = 256;

/// Mutable per-cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellState {
    pub mark: Mark,
    /// Current sprite level, in `[0, field_width)`.
    pub anim: u8,
    pub hover: bool,
}

/// What an applied event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Hover and focus moved to this cell.
    Focused(CellPos),
    /// The focused cell's mark changed.
    Marked { pos: CellPos, mark: Mark },
    /// The active tool changed.
    ToolSelected(Tool),
    /// Nothing changed.
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cells: Vec<CellState>,
    tool: Tool,
    focus: CellPos,
    field_width: usize,
    pending: VecDeque<GameEvent>,
}

impl GameState {
    /// Create a default-size game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(BOARD_SIZE, &mut SimpleRng::new(seed))
    }

    /// Generate a board of side `size` from any random source.
    pub fn with_rng<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self::with_board(Board::setup(size, rng), Tool::default())
    }

    /// Wrap an existing board. The field width fills the default surface.
    pub fn with_board(board: Board, tool: Tool) -> Self {
        let size = board.size();
        let field_width = WINDOW_SIZE / size.max(1);
        Self {
            board,
            cells: vec![CellState::default(); size * size],
            tool,
            focus: CellPos::default(),
            field_width,
            pending: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Pixel side of one cell.
    pub fn field_width(&self) -> usize {
        self.field_width
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Cell the next primary click applies to.
    pub fn focus(&self) -> CellPos {
        self.focus
    }

    pub fn cell(&self, pos: CellPos) -> Option<CellState> {
        if !self.board.contains(pos) {
            return None;
        }
        Some(self.cells[pos.index(self.size())])
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Cell currently under the pointer, if any.
    pub fn hovered(&self) -> Option<CellPos> {
        self.cells
            .iter()
            .position(|c| c.hover)
            .map(|i| CellPos::from_index(i, self.size()))
    }

    /// True while any mine has been revealed.
    pub fn is_lost(&self) -> bool {
        self.board
            .mines()
            .any(|pos| self.cells[pos.index(self.size())].mark == Mark::Revealed)
    }

    /// Map a surface pixel to the board cell under it, clamping onto the board.
    ///
    /// Rows come from the vertical axis and columns from the horizontal one.
    pub fn cell_at(&self, x: i32, y: i32) -> CellPos {
        let last = self.size().saturating_sub(1);
        let fw = self.field_width.max(1);
        let axis = |v: i32| (v.max(0) as usize / fw).min(last);
        CellPos::new(axis(y), axis(x))
    }

    /// Queue an event for the next [`GameState::drain_events`].
    pub fn push_event(&mut self, event: GameEvent) {
        if self.pending.len() == MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Apply all queued events in delivery order. Returns how many were applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.pending.pop_front() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Apply one event immediately.
    pub fn apply_event(&mut self, event: GameEvent) -> EventOutcome {
        match event {
            GameEvent::PointerMove { x, y } => self.pointer_move(x, y),
            GameEvent::PointerDown { button } => self.pointer_down(button),
            GameEvent::SelectTool(tool) => {
                if tool == self.tool {
                    return EventOutcome::Ignored;
                }
                self.tool = tool;
                EventOutcome::ToolSelected(tool)
            }
        }
    }

    fn pointer_move(&mut self, x: i32, y: i32) -> EventOutcome {
        if self.cells.is_empty() {
            return EventOutcome::Ignored;
        }
        for cell in &mut self.cells {
            cell.hover = false;
        }
        let pos = self.cell_at(x, y);
        let i = pos.index(self.size());
        self.cells[i].hover = true;
        self.focus = pos;
        EventOutcome::Focused(pos)
    }

    fn pointer_down(&mut self, button: PointerButton) -> EventOutcome {
        if button != PointerButton::Primary {
            return EventOutcome::Ignored;
        }
        let pos = self.focus;
        let Some(i) = self.board.contains(pos).then(|| pos.index(self.size())) else {
            return EventOutcome::Ignored;
        };
        let cell = &mut self.cells[i];
        cell.mark = match cell.mark {
            Mark::Unmarked => self.tool.mark(),
            Mark::Flagged => Mark::Unmarked,
            // Revealed cells stay revealed.
            Mark::Revealed => return EventOutcome::Ignored,
        };
        EventOutcome::Marked {
            pos,
            mark: cell.mark,
        }
    }

    /// Advance every cell's animation by one frame. Returns true if anything moved.
    ///
    /// Rules, first match wins:
    /// - marked and below the open band: +4
    /// - unmarked and above the hover band: -4
    /// - hovered and below the hover lift: +1
    /// - unmarked, not hovered and above zero: -1
    pub fn step_animation(&mut self) -> bool {
        let fw = self.field_width.clamp(1, u8::MAX as usize + 1);
        let max_level = (fw - 1) as u8;
        let open_limit = fw.saturating_sub(OPEN_MARGIN as usize);
        let mut moved = false;

        for cell in &mut self.cells {
            let anim = cell.anim as usize;
            let marked = cell.mark.is_marked();
            let next = if marked && anim < open_limit {
                cell.anim.saturating_add(ANIM_FAST_STEP)
            } else if !marked && cell.anim > ANIM_FAST_STEP {
                cell.anim - ANIM_FAST_STEP
            } else if cell.hover && cell.anim < HOVER_LIFT {
                cell.anim + 1
            } else if cell.anim > 0 && !cell.hover && !marked {
                cell.anim - 1
            } else {
                cell.anim
            };
            let next = next.min(max_level);
            if next != cell.anim {
                cell.anim = next;
                moved = true;
            }
        }

        moved
    }

    /// Hash of everything that affects the rendered frame.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new();
        h.write(&[self.tool.mark().code()]);
        for cell in &self.cells {
            h.write(&[cell.mark.code(), cell.anim, cell.hover as u8]);
        }
        h.finish()
    }
}

/// FNV-1a 64-bit.
struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001B3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
