// src/analise/marcadores.rs

use std::collections::HashMap;

use crate::models::{
    cidade::Cidade,
    cliente::Cliente,
    ordem_servico::{OrdemServico, STATUS_CANCELADA, STATUS_INSTALADA, STATUS_PENDENTE},
    painel::Marcador,
};

/// Cor padrão para status fora do conjunto conhecido: todo marcador precisa
/// de uma cor renderizável, venha o que vier no campo.
pub const COR_PADRAO: &str = "#3b82f6";

/// Cor de exibição de um status de O.S.
pub fn cor_do_status(status: &str) -> &'static str {
    match status {
        STATUS_PENDENTE => "#f59e0b",  // Âmbar
        STATUS_INSTALADA => "#10b981", // Verde
        STATUS_CANCELADA => "#ef4444", // Vermelho
        _ => COR_PADRAO,
    }
}

/// Cruza ordem → cliente → cidade e monta os marcadores do mapa.
///
/// Coordenadas: as do cliente quando o par está completo, senão as da cidade
/// do cliente; sem nenhum par completo a ordem fica fora do mapa. Relações
/// quebradas (cliente ou cidade inexistentes) também só excluem a ordem —
/// a saída é sempre uma lista válida, possivelmente mais curta, e um registro
/// corrompido nunca impede os demais de renderizar.
pub fn montar_marcadores(
    ordens: &[OrdemServico],
    clientes: &[Cliente],
    cidades: &[Cidade],
) -> Vec<Marcador> {
    let clientes_por_id: HashMap<i32, &Cliente> =
        clientes.iter().map(|c| (c.id, c)).collect();
    let cidades_por_id: HashMap<i32, &Cidade> =
        cidades.iter().map(|c| (c.id, c)).collect();

    let mut marcadores = Vec::new();

    for ordem in ordens {
        let Some(cliente) = clientes_por_id.get(&ordem.cliente_id) else {
            continue;
        };
        let Some(cidade) = cidades_por_id.get(&cliente.cidade_id) else {
            continue;
        };

        // Nunca um par pela metade: ou os dois valores do cliente, ou os
        // dois da cidade, ou nada.
        let coordenadas = cliente
            .latitude
            .zip(cliente.longitude)
            .or_else(|| cidade.latitude.zip(cidade.longitude));
        let Some((latitude, longitude)) = coordenadas else {
            continue;
        };

        marcadores.push(Marcador {
            ordem_id: ordem.id,
            latitude,
            longitude,
            titulo: format!("O.S. {}", ordem.numero_os),
            descricao: format!(
                "Cliente: {}<br/>Status: {}<br/>Cidade: {}-{}",
                cliente.nome_completo, ordem.status, cidade.nome, cidade.uf
            ),
            cor: cor_do_status(&ordem.status).to_string(),
            ordem: ordem.clone(),
            cliente: (*cliente).clone(),
            cidade: (*cidade).clone(),
        });
    }

    marcadores
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn agora() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 10, 8, 0, 0).unwrap()
    }

    fn ordem(id: i32, status: &str, cliente_id: i32) -> OrdemServico {
        OrdemServico {
            id,
            numero_os: format!("OS-{id:03}"),
            status: status.to_string(),
            data_criacao: agora(),
            data_vencimento: agora(),
            data_instalacao: None,
            cliente_id,
            tecnico_campo_id: 1,
            tecnico_app_id: None,
            cidade_id: 1,
            fez_na_rua: false,
            baixou_no_app: false,
            observacoes: None,
            created_at: agora(),
            updated_at: agora(),
        }
    }

    fn cliente(id: i32, cidade_id: i32, coords: Option<(f64, f64)>) -> Cliente {
        Cliente {
            id,
            nome_completo: format!("Cliente {id}"),
            cpf: None,
            endereco: "Rua das Flores".to_string(),
            numero: "10".to_string(),
            complemento: None,
            bairro: "Centro".to_string(),
            cidade_id,
            cep: None,
            ponto_referencia: None,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            created_at: agora(),
            updated_at: agora(),
        }
    }

    fn cidade(id: i32, coords: Option<(f64, f64)>) -> Cidade {
        Cidade {
            id,
            nome: format!("Cidade {id}"),
            uf: "MA".to_string(),
            regiao: None,
            codigo_ibge: None,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            created_at: agora(),
            updated_at: agora(),
        }
    }

    #[test]
    fn cores_por_status_incluem_o_fallback() {
        let ordens = vec![
            ordem(1, "PENDENTE", 1),
            ordem(2, "INSTALADA", 1),
            ordem(3, "CANCELADA", 1),
            ordem(4, "UNKNOWN", 1),
        ];
        let clientes = vec![cliente(1, 1, None)];
        let cidades = vec![cidade(1, Some((-5.52, -47.48)))];

        let cores: Vec<String> = montar_marcadores(&ordens, &clientes, &cidades)
            .into_iter()
            .map(|m| m.cor)
            .collect();

        assert_eq!(cores, vec!["#f59e0b", "#10b981", "#ef4444", "#3b82f6"]);
    }

    #[test]
    fn coordenadas_do_cliente_tem_prioridade() {
        let ordens = vec![ordem(1, "PENDENTE", 1)];
        let clientes = vec![cliente(1, 1, Some((-23.55, -46.63)))];
        let cidades = vec![cidade(1, Some((-15.78, -47.92)))];

        let marcadores = montar_marcadores(&ordens, &clientes, &cidades);
        assert_eq!(marcadores.len(), 1);
        assert_eq!(marcadores[0].latitude, -23.55);
        assert_eq!(marcadores[0].longitude, -46.63);
    }

    #[test]
    fn sem_coordenadas_usaveis_a_ordem_fica_fora() {
        let ordens = vec![ordem(1, "PENDENTE", 1), ordem(2, "PENDENTE", 2)];
        let clientes = vec![cliente(1, 1, None), cliente(2, 2, None)];
        // Cidade 1 sem coordenadas; cidade 2 com.
        let cidades = vec![cidade(1, None), cidade(2, Some((-5.52, -47.48)))];

        let marcadores = montar_marcadores(&ordens, &clientes, &cidades);
        assert_eq!(marcadores.len(), 1);
        assert_eq!(marcadores[0].ordem_id, 2);
    }

    #[test]
    fn par_de_coordenadas_pela_metade_nao_vale() {
        let mut cliente_meio = cliente(1, 1, None);
        cliente_meio.latitude = Some(-23.55); // longitude ausente

        let ordens = vec![ordem(1, "PENDENTE", 1)];
        let cidades = vec![cidade(1, None)];

        let marcadores = montar_marcadores(&ordens, &[cliente_meio], &cidades);
        assert!(marcadores.is_empty());
    }

    #[test]
    fn relacoes_quebradas_sao_puladas_em_silencio() {
        let ordens = vec![
            ordem(1, "PENDENTE", 99), // cliente inexistente
            ordem(2, "PENDENTE", 1),  // cliente aponta cidade inexistente
            ordem(3, "PENDENTE", 2),  // íntegra
        ];
        let clientes = vec![cliente(1, 99, None), cliente(2, 1, None)];
        let cidades = vec![cidade(1, Some((-5.52, -47.48)))];

        let marcadores = montar_marcadores(&ordens, &clientes, &cidades);
        assert_eq!(marcadores.len(), 1);
        assert_eq!(marcadores[0].ordem_id, 3);
    }

    #[test]
    fn marcador_nunca_sai_sem_coordenada() {
        let ordens = vec![ordem(1, "PENDENTE", 1), ordem(2, "INSTALADA", 2)];
        let clientes = vec![
            cliente(1, 1, Some((-23.55, -46.63))),
            cliente(2, 1, None),
        ];
        let cidades = vec![cidade(1, Some((-15.78, -47.92)))];

        for marcador in montar_marcadores(&ordens, &clientes, &cidades) {
            assert!(marcador.latitude.is_finite());
            assert!(marcador.longitude.is_finite());
        }
    }

    #[test]
    fn titulo_e_descricao_compostos_da_ordem_cliente_e_cidade() {
        let ordens = vec![ordem(7, "PENDENTE", 1)];
        let clientes = vec![cliente(1, 1, None)];
        let cidades = vec![cidade(1, Some((-5.52, -47.48)))];

        let marcadores = montar_marcadores(&ordens, &clientes, &cidades);
        assert_eq!(marcadores[0].titulo, "O.S. OS-007");
        assert!(marcadores[0].descricao.contains("Cliente 1"));
        assert!(marcadores[0].descricao.contains("PENDENTE"));
        assert!(marcadores[0].descricao.contains("Cidade 1-MA"));
    }
}
