//! History command module

use crate::core::session::ConverterSession;
use crate::shared::types::GetHistoryResponse;

pub fn get_history_command(session: &ConverterSession) -> GetHistoryResponse {
    GetHistoryResponse {
        entries: session.get_history(),
        records: session.history().iter().cloned().collect(),
    }
}

/// Clear the history and selection; always succeeds
pub fn reset_command(session: &mut ConverterSession) {
    session.reset();
    tracing::info!("[reset_command] Session reset");
}
