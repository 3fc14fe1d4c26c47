use super::{Dawg, Guide};

/// Cursor state distinguishing the first `next()` call (which must only
/// descend to a terminal from the start index) from later calls (which must
/// first advance past the previously-yielded key). Generalizes the source's
/// `lastIndex == 0` sentinel into an explicit state so that a terminal
/// legitimately living at DAWG index 0 can never be mistaken for "not yet
/// started".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Advancing,
    Exhausted,
}

/// Depth-first enumerator of every key reachable from a DAWG node that
/// terminates in a leaf value.
///
/// Carries its own scratch (`key`, `index_stack`); construct one per
/// concurrent caller, or reuse a single instance sequentially within a thread
/// via repeated [`Completer::start`] calls to amortize allocation.
pub struct Completer<'a> {
    dawg: &'a Dawg,
    guide: &'a Guide,
    key: Vec<u8>,
    index_stack: Vec<u32>,
    state: State,
}

impl<'a> Completer<'a> {
    pub fn new(dawg: &'a Dawg, guide: &'a Guide) -> Self {
        Self {
            dawg,
            guide,
            key: Vec::new(),
            index_stack: Vec::new(),
            state: State::Exhausted,
        }
    }

    /// Resets the cursor to enumerate completions of `index`, with `prefix`
    /// prepended to every yielded key.
    pub fn start(&mut self, index: u32, prefix: &[u8]) {
        self.key.clear();
        self.key.extend_from_slice(prefix);
        self.index_stack.clear();
        self.index_stack.push(index);
        self.state = State::Fresh;
    }

    /// The key produced by the most recent successful [`Completer::next`] call.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    fn follow(&mut self, label: u8, index: u32) -> bool {
        match self.dawg.follow_char(label, index) {
            Some(next) => {
                self.key.push(label);
                self.index_stack.push(next);
                true
            }
            None => {
                tracing::warn!(label, index, "guide points at a missing DAWG transition, stopping enumeration");
                false
            }
        }
    }

    /// Advances to the next completion. Returns `false` once exhausted.
    pub fn next(&mut self) -> bool {
        if self.state == State::Exhausted {
            return false;
        }

        let Some(&top) = self.index_stack.last() else {
            self.state = State::Exhausted;
            return false;
        };
        let mut index = top;

        if self.state == State::Advancing {
            let cl = self.guide.child(index);
            if cl != 0 {
                if !self.follow(cl, index) {
                    self.state = State::Exhausted;
                    return false;
                }
                index = *self.index_stack.last().unwrap();
            } else {
                loop {
                    let top = *self.index_stack.last().unwrap();
                    let sl = self.guide.sibling(top);
                    if !self.key.is_empty() {
                        self.key.pop();
                    }
                    self.index_stack.pop();

                    if self.index_stack.is_empty() {
                        self.state = State::Exhausted;
                        return false;
                    }

                    if sl != 0 {
                        let parent = *self.index_stack.last().unwrap();
                        if !self.follow(sl, parent) {
                            self.state = State::Exhausted;
                            return false;
                        }
                        break;
                    }
                }
                index = *self.index_stack.last().unwrap();
            }
        }

        while !self.dawg.has_value(index) {
            let cl = self.guide.child(index);
            if !self.follow(cl, index) {
                self.state = State::Exhausted;
                return false;
            }
            index = *self.index_stack.last().unwrap();
        }

        self.state = State::Advancing;
        true
    }
}
