use execution_time::ExecutionTime;
use std::{fs, process};

use gerador_de_arquivos_sped::{
    ESTADOS, GeradorResult, clear_screen, gerar_arquivos_zip, get_config, get_nome_do_mes,
    imprimir_versao_do_programa, nome_do_arquivo_zip,
};

fn main() {
    // A forma mais idiomática de reportar erros ao usuário final sem stack trace técnico
    if let Err(err) = run() {
        eprintln!("\n[ERRO CRÍTICO]: {err}");
        process::exit(1);
    }
}

fn run() -> GeradorResult<()> {
    let timer = ExecutionTime::start();

    // 1. Obter Configurações
    let config = get_config()?;

    // 2. Setup inicial
    clear_screen(config.clear)?;
    imprimir_versao_do_programa();

    if config.verbose {
        println!("{:#?}\n", config);
    }

    // 3. Relatório do lote selecionado
    println!(" Empresa: <{}>", config.empresa);
    println!(" Competência: <{}>", config.competencia);
    for mes in &config.meses {
        println!(" Mês selecionado: {} - {}", mes, get_nome_do_mes(mes));
    }
    println!();

    // 4. Geração do lote inteiro em memória
    let bytes = gerar_arquivos_zip(
        &config.empresa,
        config.ano,
        &config.competencia,
        &config.meses,
    )?;

    // 5. Gravação do ZIP em disco
    let destino = config.saida.join(nome_do_arquivo_zip(&config.empresa, config.ano));
    fs::write(&destino, &bytes)?;

    println!(
        " Gerados {} arquivos ({} estados x {} meses) em <{}> ({} bytes).",
        ESTADOS.len() * config.meses.len(),
        ESTADOS.len(),
        config.meses.len(),
        destino.display(),
        bytes.len()
    );

    println!("\n Arquivos gerados com sucesso.\n");
    timer.print_elapsed_time();

    Ok(())
}
