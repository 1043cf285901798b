// src/services/cadastro_service.rs
//
// Serviços dos cadastros (clientes, técnicos, cidades, kits): CRUD fino
// sobre os repositórios, mais as invariantes que precisam valer antes de
// salvar — contato principal único e a trava de exclusão de registros
// referenciados por ordens de serviço.

use chrono::NaiveDate;

use crate::{
    analise::{agregador, filtro},
    common::error::AppError,
    db::{CidadeRepository, ClienteRepository, ContatoRepository, KitRepository, OrdemRepository, TecnicoRepository},
    db::kit_repo::NovoComponente,
    models::{
        cidade::Cidade,
        cliente::{Cliente, ClienteDetalhe},
        contato::{self, ContatoItem},
        kit::{Fornecedor, Kit, KitDetalhe},
        ordem_servico::STATUS_INSTALADA,
        tecnico::{DesempenhoTecnico, Tecnico, TecnicoDetalhe},
    },
};

// =============================================================================
//  CLIENTES
// =============================================================================

#[derive(Clone)]
pub struct ClienteService {
    clientes: ClienteRepository,
    contatos: ContatoRepository,
    ordens: OrdemRepository,
}

impl ClienteService {
    pub fn new(
        clientes: ClienteRepository,
        contatos: ContatoRepository,
        ordens: OrdemRepository,
    ) -> Self {
        Self {
            clientes,
            contatos,
            ordens,
        }
    }

    pub async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        self.clientes.listar().await
    }

    pub async fn detalhe(&self, id: i32) -> Result<ClienteDetalhe, AppError> {
        let cliente = self
            .clientes
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado("Cliente"))?;
        let contatos = self.contatos.listar_por_entidade("cliente", id).await?;
        Ok(ClienteDetalhe { cliente, contatos })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        nome_completo: &str,
        cpf: Option<&str>,
        endereco: &str,
        numero: &str,
        complemento: Option<&str>,
        bairro: &str,
        cidade_id: i32,
        cep: Option<&str>,
        ponto_referencia: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        mut contatos: Vec<ContatoItem>,
    ) -> Result<ClienteDetalhe, AppError> {
        let cliente = self
            .clientes
            .criar(
                nome_completo,
                cpf,
                endereco,
                numero,
                complemento,
                bairro,
                cidade_id,
                cep,
                ponto_referencia,
                latitude,
                longitude,
            )
            .await?;

        contato::normalizar_principais(&mut contatos);
        self.contatos
            .substituir("cliente", cliente.id, &contatos)
            .await?;

        Ok(ClienteDetalhe { cliente, contatos })
    }

    pub async fn atualizar(
        &self,
        cliente: &Cliente,
        contatos: Option<Vec<ContatoItem>>,
    ) -> Result<ClienteDetalhe, AppError> {
        let atualizado = self.clientes.atualizar(cliente).await?;

        let contatos = match contatos {
            Some(mut novos) => {
                contato::normalizar_principais(&mut novos);
                self.contatos
                    .substituir("cliente", atualizado.id, &novos)
                    .await?;
                novos
            }
            None => {
                self.contatos
                    .listar_por_entidade("cliente", atualizado.id)
                    .await?
            }
        };

        Ok(ClienteDetalhe {
            cliente: atualizado,
            contatos,
        })
    }

    /// Marca o contato em `indice` como principal, desmarcando os demais.
    pub async fn definir_contato_principal(
        &self,
        id: i32,
        indice: usize,
    ) -> Result<ClienteDetalhe, AppError> {
        let detalhe = self.detalhe(id).await?;
        let mut contatos = detalhe.contatos;
        if indice >= contatos.len() {
            return Err(AppError::NaoEncontrado("Contato"));
        }

        contato::definir_principal(&mut contatos, indice);
        self.contatos.substituir("cliente", id, &contatos).await?;

        Ok(ClienteDetalhe {
            cliente: detalhe.cliente,
            contatos,
        })
    }

    /// Remove o contato em `indice`; se era o principal, o primeiro restante
    /// é promovido.
    pub async fn remover_contato(
        &self,
        id: i32,
        indice: usize,
    ) -> Result<ClienteDetalhe, AppError> {
        let detalhe = self.detalhe(id).await?;
        let mut contatos = detalhe.contatos;
        if indice >= contatos.len() {
            return Err(AppError::NaoEncontrado("Contato"));
        }

        contato::remover_contato(&mut contatos, indice);
        self.contatos.substituir("cliente", id, &contatos).await?;

        Ok(ClienteDetalhe {
            cliente: detalhe.cliente,
            contatos,
        })
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let ordens = self.ordens.contar_por_cliente(id).await?;
        if ordens > 0 {
            return Err(AppError::EmUso(format!(
                "Não é possível excluir o cliente pois existem {ordens} ordens de serviço associadas"
            )));
        }

        self.contatos.excluir_por_entidade("cliente", id).await?;
        let excluidos = self.clientes.excluir(id).await?;
        if excluidos == 0 {
            return Err(AppError::NaoEncontrado("Cliente"));
        }
        Ok(())
    }
}

// =============================================================================
//  TÉCNICOS
// =============================================================================

#[derive(Clone)]
pub struct TecnicoService {
    tecnicos: TecnicoRepository,
    contatos: ContatoRepository,
    ordens: OrdemRepository,
}

impl TecnicoService {
    pub fn new(
        tecnicos: TecnicoRepository,
        contatos: ContatoRepository,
        ordens: OrdemRepository,
    ) -> Self {
        Self {
            tecnicos,
            contatos,
            ordens,
        }
    }

    pub async fn listar(&self, ativo: Option<bool>) -> Result<Vec<Tecnico>, AppError> {
        self.tecnicos.listar(ativo).await
    }

    pub async fn detalhe(&self, id: i32) -> Result<TecnicoDetalhe, AppError> {
        let tecnico = self
            .tecnicos
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado("Técnico"))?;
        let contatos = self.contatos.listar_por_entidade("tecnico", id).await?;
        Ok(TecnicoDetalhe { tecnico, contatos })
    }

    pub async fn criar(
        &self,
        nome: &str,
        identificacao_campo: Option<&str>,
        identificacao_app: Option<&str>,
        ativo: bool,
        mut contatos: Vec<ContatoItem>,
    ) -> Result<TecnicoDetalhe, AppError> {
        let tecnico = self
            .tecnicos
            .criar(nome, identificacao_campo, identificacao_app, ativo)
            .await?;

        contato::normalizar_principais(&mut contatos);
        self.contatos
            .substituir("tecnico", tecnico.id, &contatos)
            .await?;

        Ok(TecnicoDetalhe { tecnico, contatos })
    }

    pub async fn atualizar(
        &self,
        tecnico: &Tecnico,
        contatos: Option<Vec<ContatoItem>>,
    ) -> Result<TecnicoDetalhe, AppError> {
        let atualizado = self.tecnicos.atualizar(tecnico).await?;

        let contatos = match contatos {
            Some(mut novos) => {
                contato::normalizar_principais(&mut novos);
                self.contatos
                    .substituir("tecnico", atualizado.id, &novos)
                    .await?;
                novos
            }
            None => {
                self.contatos
                    .listar_por_entidade("tecnico", atualizado.id)
                    .await?
            }
        };

        Ok(TecnicoDetalhe {
            tecnico: atualizado,
            contatos,
        })
    }

    /// Marca o contato em `indice` como principal, desmarcando os demais.
    pub async fn definir_contato_principal(
        &self,
        id: i32,
        indice: usize,
    ) -> Result<TecnicoDetalhe, AppError> {
        let detalhe = self.detalhe(id).await?;
        let mut contatos = detalhe.contatos;
        if indice >= contatos.len() {
            return Err(AppError::NaoEncontrado("Contato"));
        }

        contato::definir_principal(&mut contatos, indice);
        self.contatos.substituir("tecnico", id, &contatos).await?;

        Ok(TecnicoDetalhe {
            tecnico: detalhe.tecnico,
            contatos,
        })
    }

    /// Remove o contato em `indice`; se era o principal, o primeiro restante
    /// é promovido.
    pub async fn remover_contato(
        &self,
        id: i32,
        indice: usize,
    ) -> Result<TecnicoDetalhe, AppError> {
        let detalhe = self.detalhe(id).await?;
        let mut contatos = detalhe.contatos;
        if indice >= contatos.len() {
            return Err(AppError::NaoEncontrado("Contato"));
        }

        contato::remover_contato(&mut contatos, indice);
        self.contatos.substituir("tecnico", id, &contatos).await?;

        Ok(TecnicoDetalhe {
            tecnico: detalhe.tecnico,
            contatos,
        })
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let ordens = self.ordens.contar_por_tecnico(id).await?;
        if ordens > 0 {
            return Err(AppError::EmUso(format!(
                "Não é possível excluir o técnico pois existem {ordens} ordens de serviço associadas"
            )));
        }

        self.contatos.excluir_por_entidade("tecnico", id).await?;
        let excluidos = self.tecnicos.excluir(id).await?;
        if excluidos == 0 {
            return Err(AppError::NaoEncontrado("Técnico"));
        }
        Ok(())
    }

    /// Métricas de desempenho do técnico no período: ordens de campo OU de
    /// app, agregadas por status.
    pub async fn desempenho(
        &self,
        id: i32,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
    ) -> Result<DesempenhoTecnico, AppError> {
        let tecnico = self
            .tecnicos
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado("Técnico"))?;

        let ordens = self.ordens.listar().await?;
        let criterios = filtro::FiltroOrdens {
            tecnico_id: Some(id),
            data_inicio,
            data_fim,
            ..Default::default()
        };
        let do_tecnico = filtro::filtrar(&ordens, &criterios.predicados_ordem());

        let por_status = agregador::agrupar_por(&do_tecnico, |o| Some(o.status.clone()));
        let total_ordens = do_tecnico.len() as u64;
        let total_instaladas = por_status
            .iter()
            .find(|g| g.chave == STATUS_INSTALADA)
            .map(|g| g.total)
            .unwrap_or(0);

        Ok(DesempenhoTecnico {
            nome_tecnico: tecnico.nome,
            total_ordens,
            total_instaladas,
            taxa_conclusao: agregador::taxa(total_instaladas, total_ordens),
            por_status: por_status.into_iter().map(|g| (g.chave, g.total)).collect(),
        })
    }
}

// =============================================================================
//  CIDADES
// =============================================================================

#[derive(Clone)]
pub struct CidadeService {
    cidades: CidadeRepository,
    ordens: OrdemRepository,
}

impl CidadeService {
    pub fn new(cidades: CidadeRepository, ordens: OrdemRepository) -> Self {
        Self { cidades, ordens }
    }

    pub async fn listar(&self) -> Result<Vec<Cidade>, AppError> {
        self.cidades.listar().await
    }

    pub async fn buscar(&self, id: i32) -> Result<Cidade, AppError> {
        self.cidades
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado("Cidade"))
    }

    pub async fn criar(
        &self,
        nome: &str,
        uf: &str,
        regiao: Option<&str>,
        codigo_ibge: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Cidade, AppError> {
        self.cidades
            .criar(nome, uf, regiao, codigo_ibge, latitude, longitude)
            .await
    }

    pub async fn atualizar(&self, cidade: &Cidade) -> Result<Cidade, AppError> {
        self.cidades.atualizar(cidade).await
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let ordens = self.ordens.contar_por_cidade(id).await?;
        if ordens > 0 {
            return Err(AppError::EmUso(format!(
                "Não é possível excluir a cidade pois existem {ordens} ordens de serviço associadas"
            )));
        }

        let excluidas = self.cidades.excluir(id).await?;
        if excluidas == 0 {
            return Err(AppError::NaoEncontrado("Cidade"));
        }
        Ok(())
    }
}

// =============================================================================
//  KITS
// =============================================================================

#[derive(Clone)]
pub struct KitService {
    kits: KitRepository,
}

impl KitService {
    pub fn new(kits: KitRepository) -> Self {
        Self { kits }
    }

    pub async fn listar(
        &self,
        status: Option<&str>,
        fornecedor_id: Option<i32>,
    ) -> Result<Vec<Kit>, AppError> {
        self.kits.listar(status, fornecedor_id).await
    }

    pub async fn detalhe(&self, id: i32) -> Result<KitDetalhe, AppError> {
        let kit = self
            .kits
            .buscar(id)
            .await?
            .ok_or(AppError::NaoEncontrado("Kit"))?;
        let componentes = self.kits.listar_componentes(id).await?;
        Ok(KitDetalhe { kit, componentes })
    }

    pub async fn criar(
        &self,
        numero_serie: &str,
        modelo: &str,
        fornecedor_id: i32,
        status: &str,
        componentes: Vec<NovoComponente>,
    ) -> Result<KitDetalhe, AppError> {
        let kit = self
            .kits
            .criar(numero_serie, modelo, fornecedor_id, status, &componentes)
            .await?;
        let componentes = self.kits.listar_componentes(kit.id).await?;
        Ok(KitDetalhe { kit, componentes })
    }

    pub async fn listar_fornecedores(&self) -> Result<Vec<Fornecedor>, AppError> {
        self.kits.listar_fornecedores().await
    }

    pub async fn criar_fornecedor(&self, nome: &str, tipo: &str) -> Result<Fornecedor, AppError> {
        self.kits.criar_fornecedor(nome, tipo).await
    }
}
