//! Small plain+HTML renderings for each notification the site sends.

use chrono::{DateTime, Utc};

use crate::models::{Associate, EventRequest};

pub struct Rendered {
    pub subject: String,
    pub text: String,
    pub html: String,
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn admin_notification(request: &EventRequest, public_url: &str) -> Rendered {
    let review_url = format!("{public_url}/admin/solicitacoes");
    Rendered {
        subject: format!("Nova solicitação de evento: {}", request.title),
        text: format!(
            "Uma nova solicitação de evento foi recebida.\n\n\
             Evento: {}\nData: {}\nLocal: {}\nSolicitante: {} <{}>\n\n\
             Avalie a solicitação em: {}",
            request.title,
            format_date(&request.date),
            request.location,
            request.submitted_by.name,
            request.submitted_by.email,
            review_url,
        ),
        html: format!(
            "<h2>Nova solicitação de evento</h2>\
             <p><b>Evento:</b> {}<br/><b>Data:</b> {}<br/><b>Local:</b> {}<br/>\
             <b>Solicitante:</b> {} &lt;{}&gt;</p>\
             <p><a href=\"{}\">Avaliar solicitação</a></p>",
            request.title,
            format_date(&request.date),
            request.location,
            request.submitted_by.name,
            request.submitted_by.email,
            review_url,
        ),
    }
}

pub fn confirmation(request: &EventRequest) -> Rendered {
    Rendered {
        subject: "Recebemos sua solicitação de evento".to_string(),
        text: format!(
            "Olá, {}!\n\nRecebemos a solicitação do evento \"{}\" e ela será \
             avaliada pela nossa equipe. Você receberá um retorno por email.",
            request.submitted_by.name, request.title,
        ),
        html: format!(
            "<p>Olá, <b>{}</b>!</p>\
             <p>Recebemos a solicitação do evento <b>{}</b> e ela será avaliada \
             pela nossa equipe. Você receberá um retorno por email.</p>",
            request.submitted_by.name, request.title,
        ),
    }
}

pub fn approval(request: &EventRequest) -> Rendered {
    Rendered {
        subject: format!("Evento aprovado: {}", request.title),
        text: format!(
            "Olá, {}!\n\nBoa notícia: o evento \"{}\" foi aprovado e já está \
             publicado na nossa agenda para {}.",
            request.submitted_by.name,
            request.title,
            format_date(&request.date),
        ),
        html: format!(
            "<p>Olá, <b>{}</b>!</p>\
             <p>Boa notícia: o evento <b>{}</b> foi aprovado e já está publicado \
             na nossa agenda para {}.</p>",
            request.submitted_by.name,
            request.title,
            format_date(&request.date),
        ),
    }
}

pub fn rejection(request: &EventRequest, reason: &str) -> Rendered {
    Rendered {
        subject: format!("Solicitação de evento não aprovada: {}", request.title),
        text: format!(
            "Olá, {}.\n\nInfelizmente a solicitação do evento \"{}\" não foi \
             aprovada.\n\nMotivo: {}",
            request.submitted_by.name, request.title, reason,
        ),
        html: format!(
            "<p>Olá, <b>{}</b>.</p>\
             <p>Infelizmente a solicitação do evento <b>{}</b> não foi aprovada.</p>\
             <p><b>Motivo:</b> {}</p>",
            request.submitted_by.name, request.title, reason,
        ),
    }
}

pub fn associate_new(associate: &Associate, public_url: &str) -> Rendered {
    let review_url = format!("{public_url}/admin/associados");
    Rendered {
        subject: format!("Novo pedido de associação: {}", associate.name),
        text: format!(
            "Uma nova empresa pediu associação.\n\nNome: {}\nCategoria: {}\n\n\
             Avalie o pedido em: {}",
            associate.name, associate.category, review_url,
        ),
        html: format!(
            "<h2>Novo pedido de associação</h2>\
             <p><b>Nome:</b> {}<br/><b>Categoria:</b> {}</p>\
             <p><a href=\"{}\">Avaliar pedido</a></p>",
            associate.name, associate.category, review_url,
        ),
    }
}

pub fn associate_approved(associate: &Associate) -> Rendered {
    Rendered {
        subject: "Seu cadastro de associado foi aprovado".to_string(),
        text: format!(
            "Olá!\n\nO cadastro de {} foi aprovado e a empresa já aparece no \
             nosso guia de associados.",
            associate.name,
        ),
        html: format!(
            "<p>Olá!</p><p>O cadastro de <b>{}</b> foi aprovado e a empresa \
             já aparece no nosso guia de associados.</p>",
            associate.name,
        ),
    }
}

pub fn associate_rejected(associate: &Associate) -> Rendered {
    Rendered {
        subject: "Seu cadastro de associado não foi aprovado".to_string(),
        text: format!(
            "Olá.\n\nO cadastro de {} não foi aprovado. Entre em contato com \
             a nossa equipe para mais informações.",
            associate.name,
        ),
        html: format!(
            "<p>Olá.</p><p>O cadastro de <b>{}</b> não foi aprovado. Entre em \
             contato com a nossa equipe para mais informações.</p>",
            associate.name,
        ),
    }
}
