use std::{
    io::{Cursor, Write},
    process::Command,
};

use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

use crate::{
    ESTADOS, Empresa, GeradorError, GeradorResult, MODELO_BASE, RE_CAMPO_DO_MODELO, get_empresa,
    periodo_de_apuracao,
};

/// Limpar a tela.
pub fn clear_screen(clear_screen: bool) -> GeradorResult<()> {
    if clear_screen {
        if cfg!(target_os = "windows") {
            // No Windows, 'cls' é um comando interno do 'cmd'.
            // Precisamos chamar o interpretador para executá-lo.
            Command::new("cmd").args(["/c", "cls"]).status()?;
        } else {
            // Em Linux/macOS, o comando 'clear' costuma ser um executável independente.
            Command::new("clear").status()?;
        }
    }

    Ok(())
}

/// Exibe a descrição, autoria e versão do programa.
pub fn imprimir_versao_do_programa() {
    let descr = [
        "Este programa gera arquivos SPED de abertura por Unidade Federativa.",
        "Para cada mês selecionado são gerados 27 arquivos de texto, um por estado (26 estados e o Distrito Federal).",
        "Cada arquivo contém os registros fixos do leiaute (blocos 0, 1 e 9) preenchidos com os dados cadastrais da empresa.",
        "Os campos substituídos são: estado, CNPJ, razão social, período de apuração, competência e endereço do estabelecimento.",
        "Todos os arquivos são gravados em um único ZIP com a estrutura <empresa/ano/mes/UF_anomes.txt>.",
    ];

    let author = "Lucas Rennan Leonel Lubrigati (lucas.lubrigati@beeteller.com)";
    let date = "10 de Julho de 2025";
    let version = "0.10";

    for line in &descr {
        println!(" {}", line);
    }

    println!("\n {}\n {}\n versão: {}\n", author, date, version);
}

/// Preenche um modelo com os dados de uma empresa, estado e período de apuração.
///
/// A substituição é uma cadeia fixa de campos nomeados: a lista abaixo é o
/// contrato completo de campos aceitos pelo modelo. Qualquer `{campo}`
/// remanescente após a cadeia indica um modelo fora de sincronia com esta
/// função e interrompe a geração com erro, nunca com um registro em branco.
pub fn preencher_modelo(
    modelo: &str,
    empresa: &Empresa,
    estado: &str,
    data_ini: &str,
    data_fim: &str,
    competencia: &str,
) -> GeradorResult<String> {
    let conteudo = modelo
        .replace("{estado}", estado)
        .replace("{cnpj}", empresa.cnpj)
        .replace("{nome_empresa}", empresa.nome_empresa)
        .replace("{data_ini}", data_ini)
        .replace("{data_fim}", data_fim)
        .replace("{competencia}", competencia)
        .replace("{nome_fantasia}", empresa.nome_fantasia)
        .replace("{endereco}", empresa.endereco)
        .replace("{cep}", empresa.cep)
        .replace("{cod_mun}", empresa.cod_mun)
        .replace("{uf}", empresa.uf);

    match RE_CAMPO_DO_MODELO.find(&conteudo) {
        Some(campo) => Err(GeradorError::CampoNaoSubstituido {
            campo: campo.as_str().to_string(),
        }),
        None => Ok(conteudo),
    }
}

/// Gera o lote completo de arquivos e devolve o conteúdo do ZIP em memória.
///
/// Para cada mês selecionado são geradas 27 entradas, uma por Unidade
/// Federativa, no caminho `<empresa>/<ano>/<mes>/<UF>_<ano><mes>.txt`. A ordem
/// de escrita é a ordem de seleção dos meses e, dentro de cada mês, a ordem
/// fixa de [`ESTADOS`]. A data de modificação das entradas é fixa para que
/// entradas idênticas produzam sempre os mesmos bytes.
///
/// Qualquer falha interrompe a geração inteira: nenhum ZIP parcial é devolvido.
pub fn gerar_arquivos_zip(
    chave_empresa: &str,
    ano: i32,
    competencia: &str,
    meses: &[String],
) -> GeradorResult<Vec<u8>> {
    // 1. Pré-condições do lote
    if meses.is_empty() {
        return Err(GeradorError::NenhumMesSelecionado);
    }

    if competencia.trim().is_empty() {
        return Err(GeradorError::CompetenciaVazia);
    }

    let empresa = get_empresa(chave_empresa).ok_or_else(|| GeradorError::EmpresaDesconhecida {
        chave: chave_empresa.to_string(),
    })?;

    // 2. ZIP montado inteiramente em memória
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    // 3. Um arquivo por (mês, estado)
    for mes in meses {
        let (data_ini, data_fim) = periodo_de_apuracao(ano, mes)?;

        for estado in ESTADOS {
            let conteudo =
                preencher_modelo(MODELO_BASE, empresa, estado, &data_ini, &data_fim, competencia)?;
            let caminho = format!("{chave_empresa}/{ano}/{mes}/{estado}_{ano}{mes}.txt");

            zip.start_file(caminho, options)?;
            zip.write_all(conteudo.as_bytes())?;
        }
    }

    // 4. Finalização: grava o diretório central do ZIP
    let cursor = zip.finish()?;

    Ok(cursor.into_inner())
}

/// Nome sugerido para o arquivo ZIP de saída.
pub fn nome_do_arquivo_zip(chave_empresa: &str, ano: i32) -> String {
    format!("{chave_empresa}_{ano}_arquivos.zip")
}
