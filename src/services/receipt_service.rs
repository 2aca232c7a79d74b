// src/services/receipt_service.rs

use genpdf::{elements, style, Element};
use image::Luma;
use qrcode::QrCode;
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::sales::{PaymentMethod, Sale},
};

// Fontes carregadas do disco em tempo de renderização
const FONT_DIR: &str = "./fonts";
const FONT_FAMILY: &str = "Roboto";

/// Gera o recibo em PDF de uma venda fechada.
/// Vendas via PIX saem com o QR Code da chave configurada.
#[derive(Clone)]
pub struct ReceiptService {
    pix_key: Option<String>,
}

impl ReceiptService {
    pub fn new(pix_key: Option<String>) -> Self {
        Self { pix_key }
    }

    pub fn render_receipt(
        &self,
        sale: &Sale,
        company_name: Option<&str>,
    ) -> Result<Vec<u8>, AppError> {
        // 1. Configura o PDF
        let font_family = genpdf::fonts::from_files(FONT_DIR, FONT_FAMILY, None)
            .map_err(|_| AppError::FontNotFound(format!("Fonte não encontrada na pasta {}", FONT_DIR)))?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("Recibo {}", sale.id));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        // --- CABEÇALHO ---
        let title_text = company_name.unwrap_or("STOCKPILOT").to_string();
        doc.push(
            elements::Paragraph::new(title_text)
                .styled(style::Style::new().bold().with_font_size(18)),
        );

        doc.push(elements::Break::new(1.5));

        doc.push(
            elements::Paragraph::new(format!("RECIBO DE VENDA #{}", sale.id.simple()))
                .styled(style::Style::new().bold().with_font_size(14)),
        );
        doc.push(elements::Paragraph::new(format!(
            "Data: {}",
            sale.date.format("%d/%m/%Y %H:%M")
        )));

        doc.push(elements::Break::new(2));

        // --- TABELA DE ITENS ---
        // Pesos das colunas: Nome (4), Qtd (1), Preço (2), Total (2)
        let mut table = elements::TableLayout::new(vec![4, 1, 2, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        // Header da Tabela
        let style_bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Produto").styled(style_bold))
            .element(elements::Paragraph::new("Qtd").styled(style_bold))
            .element(elements::Paragraph::new("Unitário").styled(style_bold))
            .element(elements::Paragraph::new("Total").styled(style_bold))
            .push()
            .map_err(|e| anyhow::anyhow!("Erro na tabela do recibo: {}", e))?;

        // Linhas
        for item in &sale.items {
            let line_total = item.price_at_sale * Decimal::from(item.quantity);
            table
                .row()
                .element(elements::Paragraph::new(item.product_name.clone()))
                .element(elements::Paragraph::new(format!("{}", item.quantity)))
                .element(elements::Paragraph::new(format!("R$ {:.2}", item.price_at_sale)))
                .element(elements::Paragraph::new(format!("R$ {:.2}", line_total)))
                .push()
                .map_err(|e| anyhow::anyhow!("Erro na linha do recibo: {}", e))?;
        }

        doc.push(table);
        doc.push(elements::Break::new(2));

        // --- TOTAIS (impostos já embutidos) ---
        let mut total_paragraph =
            elements::Paragraph::new(format!("TOTAL GERAL: R$ {:.2}", sale.total));
        total_paragraph.set_alignment(genpdf::Alignment::Right);
        doc.push(total_paragraph.styled(style::Style::new().bold().with_font_size(12)));

        doc.push(elements::Break::new(2));

        // --- ÁREA DE PAGAMENTO (QR CODE) ---
        if sale.payment_method == PaymentMethod::Pix {
            if let Some(key) = &self.pix_key {
                doc.push(
                    elements::Paragraph::new("PAGAMENTO VIA PIX")
                        .styled(style::Style::new().bold().with_font_size(12)),
                );
                doc.push(elements::Paragraph::new(format!("Chave: {}", key)));
                doc.push(elements::Break::new(1));

                // QR Code simples da chave (email/CPF/CNPJ). Um payload
                // "Pix Copia e Cola" oficial (EMV BR Code) pediria uma lib
                // específica de payload Pix.
                let code = QrCode::new(key.as_bytes())
                    .map_err(|e| anyhow::anyhow!("Erro ao gerar QR Code: {}", e))?;

                // Renderiza para imagem
                let image_buffer = code.render::<Luma<u8>>().build();
                let dynamic_image = image::DynamicImage::ImageLuma8(image_buffer);

                // Converte para genpdf::Image
                let pdf_image = genpdf::elements::Image::from_dynamic_image(dynamic_image)
                    .map_err(|e| anyhow::anyhow!("Erro ao embutir o QR Code: {}", e))?
                    .with_scale(genpdf::Scale::new(0.5, 0.5));

                doc.push(pdf_image);
            }
        }

        // 2. Renderiza para Buffer (Memória)
        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Erro ao renderizar o recibo: {}", e))?;

        Ok(buffer)
    }
}
