use std::io;
use thiserror::Error;

/// Tipo de retorno conveniente para todo o projeto
pub type GeradorResult<T> = Result<T, GeradorError>;

#[derive(Error, Debug)]
pub enum GeradorError {
    #[error("Campo do modelo sem valor correspondente: {campo}")]
    CampoNaoSubstituido { campo: String },

    #[error("Código de mês inválido: <{codigo}>. Esperado código de 2 dígitos entre 01 e 12")]
    CodigoDeMesInvalido { codigo: String },

    #[error("Informe a competência (ex: 202507)")]
    CompetenciaVazia,

    #[error("Data inválida para o mês {mes}/{ano}")]
    DataInvalida { ano: i32, mes: String },

    #[error(
        "Empresa desconhecida: <{chave}>!\n\
        Empresas válidas: software, online, ip ou internacional.\n\
        Exemplo:\n\
        gerador_de_arquivos_sped -e software -a 2025 -c 202507 -m 07"
    )]
    EmpresaDesconhecida { chave: String },

    #[error("Erro de I/O: {0}")]
    Io(#[from] io::Error),

    #[error("Selecione ao menos um mês!")]
    NenhumMesSelecionado,

    #[error("Erro ao gravar o arquivo ZIP: {0}")]
    Zip(#[from] zip::result::ZipError),
}
