use clap::Parser;
use std::path::PathBuf;

use crate::{GeradorError, GeradorResult, RE_CODIGO_MES, get_empresa};

// Estrutura para o Clap processar os argumentos da linha de comando
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// Ano de apuração dos arquivos gerados
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(2000..=2100))]
    ano: i32,

    /// Clear screen
    #[arg(long, default_value_t = false)]
    clear: bool,

    /// Competência dos arquivos gerados (ex: 202507)
    #[arg(short, long)]
    competencia: String,

    /// Empresa geradora dos arquivos.
    ///
    /// Chaves aceitas:
    ///
    /// - `software`, `online`, `ip` ou `internacional`
    #[arg(short, long)]
    empresa: String,

    /// Meses selecionados, códigos de 2 dígitos separados por vírgula (ex: 01,02,07)
    #[arg(short, long, value_delimiter = ',')]
    meses: Vec<String>,

    /// Diretório onde o arquivo ZIP será gravado
    #[arg(short, long, default_value = ".")]
    saida: PathBuf,

    /// Ativar modo detalhado (verbose)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Debug)]
pub struct Config {
    pub ano: i32,
    pub clear: bool,
    pub competencia: String,
    pub empresa: String,
    pub meses: Vec<String>,
    pub saida: PathBuf,
    pub verbose: bool,
}

pub fn get_config() -> GeradorResult<Config> {
    let args = Arguments::parse();

    // 1. A chave de empresa deve resolver um cadastro conhecido
    if get_empresa(&args.empresa).is_none() {
        return Err(GeradorError::EmpresaDesconhecida {
            chave: args.empresa,
        });
    }

    // 2. Competência: exigida apenas não-vazia, o conteúdo é livre
    if args.competencia.trim().is_empty() {
        return Err(GeradorError::CompetenciaVazia);
    }

    // 3. Meses: códigos de 2 dígitos entre 01 e 12
    for mes in &args.meses {
        if !RE_CODIGO_MES.is_match(mes) {
            return Err(GeradorError::CodigoDeMesInvalido {
                codigo: mes.clone(),
            });
        }
    }

    // 4. Remover seleções repetidas preservando a ordem de seleção,
    // garantindo caminhos únicos dentro do ZIP
    let mut meses: Vec<String> = Vec::with_capacity(args.meses.len());
    for mes in args.meses {
        if !meses.contains(&mes) {
            meses.push(mes);
        }
    }

    if meses.is_empty() {
        return Err(GeradorError::NenhumMesSelecionado);
    }

    Ok(Config {
        ano: args.ano,
        clear: args.clear,
        competencia: args.competencia,
        empresa: args.empresa,
        meses,
        saida: args.saida,
        verbose: args.verbose,
    })
}
