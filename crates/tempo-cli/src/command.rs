//! Long-algebraic move-string parsing.

use tempo_core::{Move, MoveList, PromotionKind, Square};

use crate::error::CliError;

/// The raw fields parsed out of a move string, before resolution against a
/// legal-move list.
struct ParsedTokens {
    from: Square,
    to: Square,
    promotion: Option<PromotionKind>,
}

/// Parse `<file><rank><file><rank>[promotion]`, e.g. `"e2e4"` or `"a7a8q"`.
fn parse_tokens(input: &str) -> Result<ParsedTokens, CliError> {
    let bytes = input.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(CliError::UnparseableMove {
            input: input.to_string(),
        });
    }

    let from = Square::from_algebraic(&input[0..2]).ok_or_else(|| CliError::UnparseableMove {
        input: input.to_string(),
    })?;
    let to = Square::from_algebraic(&input[2..4]).ok_or_else(|| CliError::UnparseableMove {
        input: input.to_string(),
    })?;

    let promotion = if bytes.len() == 5 {
        Some(
            PromotionKind::from_char(bytes[4] as char).ok_or_else(|| CliError::UnparseableMove {
                input: input.to_string(),
            })?,
        )
    } else {
        None
    };

    Ok(ParsedTokens { from, to, promotion })
}

/// Parse `input` and resolve it against `legal` to find the matching legal
/// move, silently defaulting to Queen promotion when the input is a 4-char
/// move whose source/target form a promoting pawn move.
pub fn resolve_move(legal: &MoveList, input: &str) -> Result<Move, CliError> {
    let tokens = parse_tokens(input)?;

    let candidates: Vec<Move> = legal
        .as_slice()
        .iter()
        .copied()
        .filter(|m| m.from == tokens.from && m.to == tokens.to)
        .collect();

    let chosen = match tokens.promotion {
        Some(kind) => candidates.into_iter().find(|m| m.promotion == Some(kind)),
        None => candidates
            .iter()
            .copied()
            .find(|m| m.promotion == Some(PromotionKind::Queen))
            .or_else(|| candidates.first().copied()),
    };

    chosen.ok_or_else(|| CliError::IllegalMove {
        input: input.to_string(),
    })
}
