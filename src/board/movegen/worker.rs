//! Pawn and king generation on a dedicated thread.
//!
//! Each generation request carries a snapshot of the board so the worker
//! never touches engine memory. The request and reply channels hold one
//! message each, so at most one ply is ever being generated off-thread.
//! If the worker could not be started, or has gone away, the same routine
//! runs inline.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{trace, warn};

use super::super::state::Board;
use super::super::types::{Color, Figure, Step, KING, PAWN};

/// Inputs for one pawn/king generation pass.
pub(crate) struct WorkerRequest {
    pub cells: [Figure; 64],
    pub white: bool,
    pub en_passant: u8,
    pub endgame: bool,
    pub need_check: bool,
    pub buffer: Vec<Step>,
}

/// Output of one pass: generated moves and, when asked, the check verdict.
pub(crate) struct WorkerReply {
    pub buffer: Vec<Step>,
    pub in_check: Option<bool>,
}

/// Generate pawn moves (and king moves outside the endgame) for one side.
///
/// Cells are scanned from a8 for white and from h1 for black.
pub(crate) fn pawn_and_king_steps(board: &Board, request: &mut WorkerRequest) -> Option<bool> {
    let side = Color::from_white_move(request.white);
    let in_check = request.need_check.then(|| board.king_in_check(side));

    let out = &mut request.buffer;
    out.clear();
    let pawn = side.sign() * PAWN;
    let king = side.sign() * KING;
    for ii in 0..64 {
        let idx = if request.white { ii } else { 63 - ii };
        let fig = board.get(idx);
        if fig == pawn {
            board.generate_pawn_steps(idx, out);
        } else if fig == king && !request.endgame {
            board.generate_king_steps(idx, out);
        }
    }
    board.generate_en_passant_steps(request.white, request.en_passant, out);
    in_check
}

fn serve(requests: Receiver<WorkerRequest>, replies: Sender<WorkerReply>) {
    trace!("pawn/king worker started");
    while let Ok(mut request) = requests.recv() {
        let board = Board::from_cells(request.cells);
        let in_check = pawn_and_king_steps(&board, &mut request);
        let reply = WorkerReply {
            buffer: request.buffer,
            in_check,
        };
        if replies.send(reply).is_err() {
            break;
        }
    }
    trace!("pawn/king worker stopped");
}

/// Handle to the long-lived pawn/king worker thread.
pub(crate) struct PawnKingWorker {
    requests: Option<Sender<WorkerRequest>>,
    replies: Receiver<WorkerReply>,
    handle: Option<JoinHandle<()>>,
    spare: Vec<Step>,
}

impl PawnKingWorker {
    pub(crate) fn spawn() -> Self {
        let (request_tx, request_rx) = bounded::<WorkerRequest>(1);
        let (reply_tx, reply_rx) = bounded::<WorkerReply>(1);
        let spawned = thread::Builder::new()
            .name("pawn-king-gen".to_string())
            .spawn(move || serve(request_rx, reply_tx));
        let (requests, handle) = match spawned {
            Ok(handle) => (Some(request_tx), Some(handle)),
            Err(err) => {
                warn!("move generation worker unavailable, generating inline: {err}");
                (None, None)
            }
        };
        PawnKingWorker {
            requests,
            replies: reply_rx,
            handle,
            spare: Vec::with_capacity(64),
        }
    }

    /// Build a request around the recycled move buffer.
    pub(crate) fn request(
        &mut self,
        board: &Board,
        white: bool,
        en_passant: u8,
        endgame: bool,
        need_check: bool,
    ) -> WorkerRequest {
        WorkerRequest {
            cells: *board.cells(),
            white,
            en_passant,
            endgame,
            need_check,
            buffer: std::mem::take(&mut self.spare),
        }
    }

    /// Hand a request to the worker. Returns it back if the worker is gone.
    pub(crate) fn dispatch(&self, request: WorkerRequest) -> Result<(), WorkerRequest> {
        match &self.requests {
            Some(tx) => tx.send(request).map_err(|err| err.into_inner()),
            None => Err(request),
        }
    }

    /// Block until the dispatched request has been answered.
    pub(crate) fn collect(&self) -> Option<WorkerReply> {
        self.replies.recv().ok()
    }

    /// Return a drained buffer for the next request.
    pub(crate) fn recycle(&mut self, mut buffer: Vec<Step>) {
        buffer.clear();
        self.spare = buffer;
    }
}

impl Drop for PawnKingWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
