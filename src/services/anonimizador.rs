// src/services/anonimizador.rs

use std::collections::HashMap;

const LETRAS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const TIPOS_LOGRADOURO: [&str; 4] = ["Rua", "Avenida", "Alameda", "Travessa"];
const NOMES_LOGRADOURO: [&str; 7] = [
    "das Flores", "dos Ipês", "Principal", "Central", "Comercial", "Industrial", "Residencial",
];

/// Substitui nomes reais por pseudônimos nas exportações.
///
/// Cada mapa atribui pseudônimos na ordem da primeira aparição ("Técnico A",
/// "Cidade B", "Cliente 001"), de forma puramente determinística: o mesmo
/// conjunto de dados, na mesma ordem, produz sempre os mesmos pseudônimos.
/// Uma instância vive por sessão de exportação e é descartada no fim — nada
/// de estado global.
#[derive(Debug, Default)]
pub struct Anonimizador {
    tecnicos: HashMap<String, String>,
    cidades: HashMap<String, String>,
    clientes: HashMap<String, String>,
    enderecos: HashMap<String, String>,
}

impl Anonimizador {
    pub fn new() -> Self {
        Self::default()
    }

    fn pseudonimo(
        mapa: &mut HashMap<String, String>,
        nome: &str,
        gerar: impl Fn(usize) -> String,
    ) -> String {
        if nome.is_empty() {
            return String::new();
        }
        let proximo = mapa.len();
        mapa.entry(nome.to_string())
            .or_insert_with(|| gerar(proximo))
            .clone()
    }

    pub fn tecnico(&mut self, nome: &str) -> String {
        Self::pseudonimo(&mut self.tecnicos, nome, |i| {
            format!("Técnico {}", LETRAS[i % LETRAS.len()])
        })
    }

    pub fn cidade(&mut self, nome: &str) -> String {
        Self::pseudonimo(&mut self.cidades, nome, |i| {
            format!("Cidade {}", LETRAS[i % LETRAS.len()])
        })
    }

    pub fn cliente(&mut self, nome: &str) -> String {
        Self::pseudonimo(&mut self.clientes, nome, |i| format!("Cliente {:03}", i + 1))
    }

    /// Endereço genérico ancorado ao cliente: o mesmo cliente recebe sempre o
    /// mesmo logradouro dentro da sessão — sem sorteio, para a exportação ser
    /// reproduzível.
    pub fn endereco(&mut self, nome_cliente: &str) -> String {
        Self::pseudonimo(&mut self.enderecos, nome_cliente, |i| {
            format!(
                "{} {}, {}",
                TIPOS_LOGRADOURO[i % TIPOS_LOGRADOURO.len()],
                NOMES_LOGRADOURO[i % NOMES_LOGRADOURO.len()],
                100 + i
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudonimos_seguem_a_ordem_de_primeira_aparicao() {
        let mut anon = Anonimizador::new();

        assert_eq!(anon.tecnico("José"), "Técnico A");
        assert_eq!(anon.tecnico("Carlos"), "Técnico B");
        // Nome repetido mantém o pseudônimo já atribuído.
        assert_eq!(anon.tecnico("José"), "Técnico A");

        assert_eq!(anon.cliente("Maria"), "Cliente 001");
        assert_eq!(anon.cliente("Ana"), "Cliente 002");
    }

    #[test]
    fn sessoes_separadas_sao_independentes() {
        let mut primeira = Anonimizador::new();
        primeira.tecnico("José");
        primeira.tecnico("Carlos");

        // Uma nova sessão recomeça do "Técnico A".
        let mut segunda = Anonimizador::new();
        assert_eq!(segunda.tecnico("Carlos"), "Técnico A");
    }

    #[test]
    fn nome_vazio_fica_vazio() {
        let mut anon = Anonimizador::new();
        assert_eq!(anon.tecnico(""), "");
        assert_eq!(anon.cidade(""), "");
    }

    #[test]
    fn endereco_e_estavel_para_o_mesmo_cliente() {
        let mut anon = Anonimizador::new();

        let primeiro = anon.endereco("Maria");
        let _ = anon.endereco("Ana");
        // Mesmo cliente, mesmo endereço, mesmo com outros no meio.
        assert_eq!(anon.endereco("Maria"), primeiro);

        // E duas sessões com a mesma ordem de entrada coincidem.
        let mut outra = Anonimizador::new();
        assert_eq!(outra.endereco("Maria"), primeiro);
    }
}
