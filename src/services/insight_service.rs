// src/services/insight_service.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::models::catalog::Product;
use crate::models::insights::ProductSuggestion;
use crate::models::sales::Sale;

const GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

// Textos de contingência exibidos no painel quando a IA não responde.
// Falha do colaborador nunca vira erro estruturado para o chamador.
const MISSING_KEY_FALLBACK: &str =
    "Chave de API ausente. Configure o ambiente para receber insights da IA.";
const UNAVAILABLE_FALLBACK: &str =
    "Não foi possível gerar insights no momento. Tente novamente mais tarde.";

/// O colaborador de IA como dependência injetada: a implementação real
/// fala com o Gemini, os testes injetam um dublê determinístico.
#[async_trait]
pub trait InsightService: Send + Sync {
    /// Relatório textual sobre o retrato atual de estoque e vendas.
    /// Sempre devolve texto legível; na pior hipótese, o de contingência.
    async fn generate_insights(&self, products: &[Product], recent_sales: &[Sale]) -> String;

    /// Palpite estruturado (nome/categoria/descrição) para uma foto de
    /// produto. `None` quando não há sugestão aproveitável.
    async fn analyze_product_image(&self, image_base64: &str) -> Option<ProductSuggestion>;
}

pub struct GeminiInsightService {
    client: Client,
    api_key: Option<String>,
}

impl GeminiInsightService {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }

    // Uma única ida e volta, sem retry nem fila: quem clicou de novo
    // dispara outra chamada independente.
    async fn send_request(&self, api_key: &str, payload: &Value) -> Option<String> {
        let response = self
            .client
            .post(GEMINI_URL)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                let body: Value = response.json().await.ok()?;
                extract_text(&body)
            }
            Ok(response) => {
                tracing::error!("Gemini respondeu {}", response.status());
                None
            }
            Err(e) => {
                tracing::error!("Falha de rede ao chamar o Gemini: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl InsightService for GeminiInsightService {
    async fn generate_insights(&self, products: &[Product], recent_sales: &[Sale]) -> String {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("GEMINI_API_KEY ausente; devolvendo texto de contingência");
            return MISSING_KEY_FALLBACK.to_string();
        };

        let payload = json!({
            "contents": [{
                "parts": [{ "text": build_insight_prompt(products, recent_sales) }]
            }]
        });

        match self.send_request(api_key, &payload).await {
            Some(text) => text,
            None => UNAVAILABLE_FALLBACK.to_string(),
        }
    }

    async fn analyze_product_image(&self, image_base64: &str) -> Option<ProductSuggestion> {
        let api_key = self.api_key.as_ref()?;

        let payload = json!({
            "contents": [{
                "parts": [
                    {
                        "text": "Analise esta imagem de produto. Extraia um nome provável, \
                                 uma categoria sugerida e uma curta descrição. Retorne APENAS \
                                 um objeto JSON com as chaves: name, category, description. \
                                 O conteúdo deve ser em Português."
                    },
                    {
                        "inline_data": {
                            "mime_type": "image/jpeg",
                            "data": image_base64
                        }
                    }
                ]
            }]
        });

        let text = self.send_request(api_key, &payload).await?;
        extract_json_block(&text)
    }
}

/// O prompt do relatório: retrato do inventário + vendas recentes e as
/// quatro seções pedidas, em Português do Brasil.
fn build_insight_prompt(products: &[Product], recent_sales: &[Sale]) -> String {
    let inventory_summary: Vec<String> = products
        .iter()
        .map(|p| {
            format!(
                "- {} (SKU: {}): {} {} em estoque. Min: {}. Custo: R${}. Preço: R${}.",
                p.name, p.sku, p.stock, p.unit, p.min_stock, p.cost, p.price
            )
        })
        .collect();

    let sales_summary: Vec<String> = recent_sales
        .iter()
        .take(10)
        .map(|s| {
            format!(
                "- Venda em {}: R${} ({} itens)",
                s.date.format("%d/%m/%Y"),
                s.total,
                s.items.len()
            )
        })
        .collect();

    format!(
        "Você é a StockPilot AI, uma especialista em gestão de estoque para pequenos negócios no Brasil.\n\
         Analise o seguinte inventário e dados de vendas recentes.\n\
         \n\
         Inventário:\n{}\n\
         \n\
         Vendas Recentes:\n{}\n\
         \n\
         Por favor, forneça um relatório conciso e acionável em Português do Brasil cobrindo:\n\
         1. **Alertas de Reposição**: Quais itens estão criticamente baixos (baseado no estoque mínimo)?\n\
         2. **Estoque Parado**: Identifique itens que podem estar em excesso (estoque alto vs vendas baixas).\n\
         3. **Oportunidade de Lucro**: Sugira ajustes de preço ou promoções baseados nas margens.\n\
         4. **Previsão**: Uma previsão breve para a próxima semana.\n\
         \n\
         Formate a resposta em Markdown com cabeçalhos claros. Mantenha um tom profissional e encorajador.",
        inventory_summary.join("\n"),
        sales_summary.join("\n")
    )
}

// Caminho feliz do corpo do Gemini: candidates[0].content.parts[0].text,
// com limpeza de cercas de markdown.
fn extract_text(body: &Value) -> Option<String> {
    let text = body
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()?;

    let cleaned = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    Some(cleaned.to_string())
}

/// Localiza o primeiro bloco delimitado por chaves na resposta e tenta
/// interpretá-lo como sugestão de produto. Qualquer coisa fora disso é
/// "sem sugestão".
fn extract_json_block(text: &str) -> Option<ProductSuggestion> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&text[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_block_reads_embedded_object() {
        let reply = "Claro! Aqui está:\n{\"name\": \"Caneca\", \"category\": \"Cozinha\", \"description\": \"Caneca branca de cerâmica\"}\nEspero ter ajudado.";

        let suggestion = extract_json_block(reply).expect("bloco JSON deveria ser lido");
        assert_eq!(suggestion.name, "Caneca");
        assert_eq!(suggestion.category, "Cozinha");
    }

    #[test]
    fn extract_json_block_rejects_plain_text() {
        assert!(extract_json_block("não consegui identificar o produto").is_none());
    }

    #[test]
    fn extract_json_block_rejects_malformed_object() {
        assert!(extract_json_block("{\"name\": \"Caneca\"").is_none());
        assert!(extract_json_block("{\"name\": \"Caneca\"}").is_none());
    }

    #[test]
    fn extract_text_walks_candidate_structure() {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "```json\n{\"ok\":true}\n```" }] }
            }]
        });

        assert_eq!(extract_text(&body).as_deref(), Some("{\"ok\":true}"));
    }
}
