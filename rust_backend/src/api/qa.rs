use crate::algorithms::summary::TableSummary;

/// Build the prompt handed to a language model for a question about the
/// final table.
///
/// The model only ever sees the summary JSON, never the table itself, so the
/// answer quality is bounded by what [`TableSummary`] carries. The analyst
/// persona and answer language are part of the product contract.
pub fn build_question_prompt(summary: &TableSummary, question: &str) -> serde_json::Result<String> {
    let summary_json = summary.to_json()?;
    Ok(format!(
        "Você é um analista de dados de contact center.\n\
         Use os dados do resumo estatístico abaixo para responder à pergunta \
         do usuário de forma clara, objetiva e em português.\n\n\
         Resumo Estatístico (JSON): {summary_json}\n\
         Pergunta: {question}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> TableSummary {
        TableSummary {
            media_geral: 40.0,
            media_pico: 75.0,
            media_vale: Some(5.0),
            top_5_capacity_pico: vec![8, 7, 6, 5, 4],
            top_5_capacity_vale: vec![6, 5, 4, 2, 1],
            top_5_horas_capacity: vec![14, 13, 12, 11, 10],
        }
    }

    #[test]
    fn test_prompt_embeds_summary_and_question() {
        let prompt =
            build_question_prompt(&summary(), "Qual hora tem o maior capacity?").unwrap();

        assert!(prompt.contains("analista de dados de contact center"));
        assert!(prompt.contains("\"media_geral\":40.0"));
        assert!(prompt.contains("Pergunta: Qual hora tem o maior capacity?"));
    }

    #[test]
    fn test_prompt_keeps_null_off_peak() {
        let summary = TableSummary {
            media_vale: None,
            ..summary()
        };
        let prompt = build_question_prompt(&summary, "e o vale?").unwrap();
        assert!(prompt.contains("\"media_vale\":null"));
    }
}
